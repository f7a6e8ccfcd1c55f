//! Family tagging of flattened entries.

use crate::spf::ip::{is_valid_address, AddressFamily};

/// Returns `"ip4"` or `"ip6"` for a flattened entry.
///
/// Re-runs the validator's IPv4 family check on the address portion; any
/// entry not representable in 4-byte form (including manual entries that are
/// not IP literals at all) is tagged `ip6`. Pure post-processing for the
/// CLI's `--tags` output; the flattened list itself is untouched.
pub fn family_tag(entry: &str) -> &'static str {
    if is_valid_address(entry, AddressFamily::V4) {
        "ip4"
    } else {
        "ip6"
    }
}
