//! Parsed representation of one domain's SPF record.

/// The mechanisms extracted from a single SPF TXT record.
///
/// Each list preserves record order. Built once per TXT lookup and discarded
/// after its entries are merged into the caller's accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpfRecord {
    /// `ip4:` values that passed IPv4 validation.
    pub ip4: Vec<String>,
    /// `ip6:` values that passed IPv6 validation.
    pub ip6: Vec<String>,
    /// `include:` domains (lowercased, non-empty).
    pub includes: Vec<String>,
}

impl SpfRecord {
    /// True when the record carries no recognized mechanisms at all.
    pub fn is_empty(&self) -> bool {
        self.ip4.is_empty() && self.ip6.is_empty() && self.includes.is_empty()
    }
}
