//! SPF mechanism parsing.

use crate::config::constants::SPF_VERSION_TAG;
use crate::error_handling::SpfError;
use crate::spf::ip::{is_valid_address, AddressFamily};
use crate::spf::record::SpfRecord;

/// Parses the text of an SPF record into its recognized mechanisms.
///
/// The caller supplies already-lowercased text (TXT candidate selection
/// lowercases the record), so prefix matching here is case-sensitive.
///
/// Only the version tag can fail the parse: an empty record or a first token
/// that does not start with `v=spf1` yields [`SpfError::InvalidRecord`].
/// Malformed `ip4:`/`ip6:` values and empty `include:` values are dropped
/// silently rather than erroring — softening either side of that asymmetry
/// would change the observable output. All other mechanisms and modifiers
/// (`a`, `mx`, `redirect=`, qualifiers, ...) are ignored.
///
/// # Errors
///
/// Returns `SpfError::InvalidRecord` if the record is empty or does not
/// begin with the SPF version tag.
pub fn parse_record(text: &str) -> Result<SpfRecord, SpfError> {
    let mut tokens = text.split_whitespace();
    let version = tokens.next().ok_or_else(|| SpfError::InvalidRecord {
        record: text.to_string(),
    })?;
    if !version.starts_with(SPF_VERSION_TAG) {
        return Err(SpfError::InvalidRecord {
            record: text.to_string(),
        });
    }

    let mut record = SpfRecord::default();
    for token in tokens {
        if let Some(value) = token.strip_prefix("ip4:") {
            if is_valid_address(value, AddressFamily::V4) {
                record.ip4.push(value.to_string());
            }
        } else if let Some(value) = token.strip_prefix("ip6:") {
            if is_valid_address(value, AddressFamily::V6) {
                record.ip6.push(value.to_string());
            }
        } else if let Some(value) = token.strip_prefix("include:") {
            if !value.is_empty() {
                record.includes.push(value.to_string());
            }
        }
        // qualifiers, a, mx, ptr, exists, redirect=, exp=, ... are ignored
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_spf_text() {
        let err = parse_record("not an spf record").unwrap_err();
        assert!(matches!(err, SpfError::InvalidRecord { .. }));
    }

    #[test]
    fn test_rejects_empty_record() {
        assert!(matches!(
            parse_record("").unwrap_err(),
            SpfError::InvalidRecord { .. }
        ));
        assert!(matches!(
            parse_record("   ").unwrap_err(),
            SpfError::InvalidRecord { .. }
        ));
    }

    #[test]
    fn test_extracts_recognized_mechanisms() {
        let record =
            parse_record("v=spf1 ip4:203.0.113.5 ip6:2001:db8::1 include:example.com a mx -all")
                .unwrap();
        assert_eq!(record.ip4, vec!["203.0.113.5"]);
        assert_eq!(record.ip6, vec!["2001:db8::1"]);
        assert_eq!(record.includes, vec!["example.com"]);
    }

    #[test]
    fn test_version_tag_alone_is_valid_and_empty() {
        let record = parse_record("v=spf1").unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_invalid_ip_values_are_dropped_silently() {
        let record = parse_record("v=spf1 ip4:not-an-ip ip4:203.0.113.5 ip6:203.0.113.5").unwrap();
        // the bad ip4 value and the v4 literal in the ip6 mechanism both vanish
        assert_eq!(record.ip4, vec!["203.0.113.5"]);
        assert!(record.ip6.is_empty());
    }

    #[test]
    fn test_empty_include_is_dropped() {
        let record = parse_record("v=spf1 include: include:example.com").unwrap();
        assert_eq!(record.includes, vec!["example.com"]);
    }

    #[test]
    fn test_cidr_ranges_are_kept() {
        let record = parse_record("v=spf1 ip4:203.0.113.0/24 ip6:2001:db8::/32").unwrap();
        assert_eq!(record.ip4, vec!["203.0.113.0/24"]);
        assert_eq!(record.ip6, vec!["2001:db8::/32"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let record = parse_record("v=spf1 ip4:198.51.100.1 ip4:203.0.113.5").unwrap();
        assert_eq!(record.ip4, vec!["198.51.100.1", "203.0.113.5"]);
    }

    #[test]
    fn test_unknown_tokens_do_not_fail_the_parse() {
        let record = parse_record("v=spf1 ptr exists:%{i}.example.com redirect=other.example ~all")
            .unwrap();
        assert!(record.is_empty());
    }
}
