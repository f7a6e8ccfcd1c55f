//! Recursive expansion of SPF include trees.

use std::collections::HashSet;

use anyhow::{Context, Result};
use futures::future::BoxFuture;

use crate::dns::TxtClient;
use crate::spf::fetch::fetch_spf;

/// Recursively resolves `domain` into its flat list of IP entries.
///
/// The domain is lowercased; if it is already in `visited`, the call returns
/// an empty list immediately. Insertion happens before the fetch, so a
/// domain that includes itself (directly or transitively) is never
/// re-fetched — that visited set is the sole cycle guard, and it also means
/// a domain legitimately included from two places contributes its entries
/// only on the first encounter.
///
/// Entries come back depth-first: the domain's own `ip4:` values, then its
/// `ip6:` values, then each include's resolution in record order. The same
/// `visited` set is threaded through every nested call, so sibling branches
/// observe each other's visits. Queries are strictly sequential; recursion
/// depth is bounded only by the number of distinct reachable domains.
///
/// The result may contain duplicates; deduplication is the orchestrator's
/// job ([`crate::spf::flatten`]).
///
/// # Errors
///
/// Any fetch failure aborts the whole call. Nested failures are wrapped with
/// context naming the failing include, so the error chain walks the include
/// tree down to the node that failed.
pub fn resolve_domain<'a, C: TxtClient>(
    client: &'a C,
    domain: &str,
    visited: &'a mut HashSet<String>,
) -> BoxFuture<'a, Result<Vec<String>>> {
    let domain = domain.to_lowercase();
    Box::pin(async move {
        if !visited.insert(domain.clone()) {
            return Ok(Vec::new());
        }
        log::debug!("resolving SPF record for {domain}");

        let record = fetch_spf(client, &domain).await?;

        let mut entries: Vec<String> = Vec::new();
        entries.extend(record.ip4.iter().cloned());
        entries.extend(record.ip6.iter().cloned());

        for include in &record.includes {
            let nested = resolve_domain(client, include, visited)
                .await
                .with_context(|| format!("failed to resolve include {include}"))?;
            entries.extend(nested);
        }

        Ok(entries)
    })
}
