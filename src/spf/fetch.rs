//! SPF record fetching over DNS.

use crate::config::constants::SPF_VERSION_TAG;
use crate::dns::{fqdn, TxtClient};
use crate::error_handling::SpfError;
use crate::spf::parser::parse_record;
use crate::spf::record::SpfRecord;

/// Fetches and parses the SPF record of `domain`.
///
/// Issues a TXT query for the fully-qualified form of `domain` and scans the
/// answer's character-string segments in order; the first segment that
/// case-insensitively starts with `v=spf1` is the candidate record. The
/// candidate is lowercased before parsing, so downstream matching and the
/// include domains it yields are all lowercase.
///
/// # Errors
///
/// - [`SpfError::QueryFailed`] — transport failure or non-success response
///   code (an empty answer is not a query failure).
/// - [`SpfError::NoRecord`] — DNS answered but no segment starts with the
///   version tag.
/// - [`SpfError::InvalidRecord`] — propagated from the parser.
pub async fn fetch_spf<C: TxtClient>(client: &C, domain: &str) -> Result<SpfRecord, SpfError> {
    let name = fqdn(domain);
    let segments = client
        .query_txt(&name)
        .await
        .map_err(|source| SpfError::QueryFailed {
            domain: domain.to_string(),
            source,
        })?;

    let candidate = segments
        .iter()
        .find(|segment| segment.to_lowercase().starts_with(SPF_VERSION_TAG));

    match candidate {
        Some(segment) => parse_record(&segment.to_lowercase()),
        None => Err(SpfError::NoRecord {
            domain: domain.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::{DnsError, MockTxtClient};

    #[tokio::test]
    async fn test_fetch_parses_spf_segment() {
        let client = MockTxtClient::new();
        client.add_txt(
            "example.com",
            vec!["v=spf1 ip4:203.0.113.5 -all".to_string()],
        );

        let record = fetch_spf(&client, "example.com").await.unwrap();
        assert_eq!(record.ip4, vec!["203.0.113.5"]);
    }

    #[tokio::test]
    async fn test_fetch_skips_non_spf_segments() {
        let client = MockTxtClient::new();
        client.add_txt(
            "example.com",
            vec![
                "google-site-verification=abc123".to_string(),
                "v=spf1 include:spf.example.net -all".to_string(),
                "some other txt record".to_string(),
            ],
        );

        let record = fetch_spf(&client, "example.com").await.unwrap();
        assert_eq!(record.includes, vec!["spf.example.net"]);
    }

    #[tokio::test]
    async fn test_fetch_candidate_selection_is_case_insensitive() {
        let client = MockTxtClient::new();
        client.add_txt(
            "example.com",
            vec!["V=SPF1 INCLUDE:Spf.Example.NET -ALL".to_string()],
        );

        let record = fetch_spf(&client, "example.com").await.unwrap();
        // record text is lowercased before parsing
        assert_eq!(record.includes, vec!["spf.example.net"]);
    }

    #[tokio::test]
    async fn test_fetch_no_spf_segment_is_no_record() {
        let client = MockTxtClient::new();
        client.add_txt("example.com", vec!["unrelated".to_string()]);

        let err = fetch_spf(&client, "example.com").await.unwrap_err();
        assert!(matches!(err, SpfError::NoRecord { ref domain } if domain == "example.com"));
    }

    #[tokio::test]
    async fn test_fetch_empty_answer_is_no_record() {
        let client = MockTxtClient::new();

        let err = fetch_spf(&client, "example.com").await.unwrap_err();
        assert!(matches!(err, SpfError::NoRecord { .. }));
    }

    #[tokio::test]
    async fn test_fetch_dns_failure_is_query_failed() {
        let client = MockTxtClient::new();
        client.set_error(
            "example.com",
            DnsError::ResponseCode("SERVFAIL".to_string()),
        );

        let err = fetch_spf(&client, "example.com").await.unwrap_err();
        assert!(matches!(err, SpfError::QueryFailed { ref domain, .. } if domain == "example.com"));
    }

    #[tokio::test]
    async fn test_fetch_picks_first_spf_segment() {
        let client = MockTxtClient::new();
        client.add_txt(
            "example.com",
            vec![
                "v=spf1 ip4:198.51.100.1 -all".to_string(),
                "v=spf1 ip4:203.0.113.5 -all".to_string(),
            ],
        );

        let record = fetch_spf(&client, "example.com").await.unwrap();
        assert_eq!(record.ip4, vec!["198.51.100.1"]);
    }
}
