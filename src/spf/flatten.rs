//! Flattening orchestration and deduplication.

use std::collections::HashSet;

use anyhow::{Context, Result};

use crate::dns::TxtClient;
use crate::spf::resolve::resolve_domain;

/// Flattens manual IP entries and recursively-resolved include domains into
/// one deduplicated, ordered list.
///
/// The accumulator starts with `ip4` then `ip6`, copied verbatim — manual
/// entries are the operator's responsibility and bypass validation. Include
/// domains are then resolved in order against a single visited set, so two
/// top-level includes sharing a nested include resolve it once, in whichever
/// branch reaches it first. If no includes are given, no DNS query is
/// issued.
///
/// # Errors
///
/// A failure on any include aborts the whole operation with context naming
/// the failing top-level domain; there is no partial result.
pub async fn flatten<C: TxtClient>(
    client: &C,
    ip4: &[String],
    ip6: &[String],
    includes: &[String],
) -> Result<Vec<String>> {
    let mut entries: Vec<String> = Vec::new();
    entries.extend(ip4.iter().cloned());
    entries.extend(ip6.iter().cloned());

    let mut visited: HashSet<String> = HashSet::new();
    for domain in includes {
        let resolved = resolve_domain(client, domain, &mut visited)
            .await
            .with_context(|| format!("failed to resolve include domain {domain}"))?;
        entries.extend(resolved);
    }

    Ok(dedup_entries(entries))
}

/// Removes exact-string duplicates, keeping the first occurrence of each
/// entry. Idempotent: applying it twice yields the same list.
pub fn dedup_entries(entries: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut result: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        if seen.insert(entry.clone()) {
            result.push(entry);
        }
    }
    result
}
