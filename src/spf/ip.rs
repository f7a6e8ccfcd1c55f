//! IP literal validation.

use std::net::IpAddr;

/// Address family an SPF mechanism value is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    /// IPv4 (`ip4:` mechanisms)
    V4,
    /// IPv6 (`ip6:` mechanisms)
    V6,
}

/// Checks whether `text` is a syntactically valid IP literal of the given
/// family, optionally carrying a `/prefix` CIDR suffix.
///
/// The prefix length itself is not range-checked. An address counts as IPv4
/// when it is representable in 4-byte form, which includes IPv4-mapped IPv6
/// literals such as `::ffff:203.0.113.5`. It counts as IPv6 when it parses,
/// is not representable in 4 bytes, and the address portion contains a
/// colon. Invalid input yields `false`, never an error.
pub fn is_valid_address(text: &str, family: AddressFamily) -> bool {
    let addr = text.split('/').next().unwrap_or(text);
    let Ok(parsed) = addr.parse::<IpAddr>() else {
        return false;
    };
    match family {
        AddressFamily::V4 => match parsed {
            IpAddr::V4(_) => true,
            IpAddr::V6(v6) => v6.to_ipv4_mapped().is_some(),
        },
        AddressFamily::V6 => match parsed {
            IpAddr::V4(_) => false,
            IpAddr::V6(v6) => v6.to_ipv4_mapped().is_none() && addr.contains(':'),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_classification() {
        assert!(is_valid_address("203.0.113.5", AddressFamily::V4));
        assert!(!is_valid_address("203.0.113.5", AddressFamily::V6));
        assert!(is_valid_address("2001:db8::1", AddressFamily::V6));
        assert!(!is_valid_address("2001:db8::1", AddressFamily::V4));
    }

    #[test]
    fn test_cidr_suffix_is_stripped() {
        assert!(is_valid_address("203.0.113.5/24", AddressFamily::V4));
        assert!(is_valid_address("2001:db8::/32", AddressFamily::V6));
        // Prefix lengths are not range-checked
        assert!(is_valid_address("203.0.113.5/99", AddressFamily::V4));
    }

    #[test]
    fn test_invalid_input_is_false() {
        assert!(!is_valid_address("not-an-ip", AddressFamily::V4));
        assert!(!is_valid_address("not-an-ip", AddressFamily::V6));
        assert!(!is_valid_address("", AddressFamily::V4));
        assert!(!is_valid_address("203.0.113", AddressFamily::V4));
        assert!(!is_valid_address("203.0.113.5.6", AddressFamily::V4));
    }

    #[test]
    fn test_ipv4_mapped_counts_as_v4() {
        // ::ffff:a.b.c.d is representable in 4-byte form, so it lands in the
        // IPv4 bucket and is excluded from the IPv6 bucket.
        assert!(is_valid_address("::ffff:203.0.113.5", AddressFamily::V4));
        assert!(!is_valid_address("::ffff:203.0.113.5", AddressFamily::V6));
    }

    #[test]
    fn test_unspecified_v6_is_v6() {
        // :: is all-zero but not IPv4-mapped
        assert!(is_valid_address("::", AddressFamily::V6));
        assert!(!is_valid_address("::", AddressFamily::V4));
    }
}
