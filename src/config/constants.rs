//! Application-wide constants.
//!
//! This module centralizes tunable values so they're easy to find and adjust.

/// Version tag every SPF record must start with (RFC 7208 §4.5).
pub const SPF_VERSION_TAG: &str = "v=spf1";

/// Default DNS resolver endpoint, used when `DNS_RESOLVER` is not set and
/// `--resolver` is not given.
pub const DEFAULT_RESOLVER: &str = "127.0.0.1:53";

/// Environment variable that overrides the resolver endpoint.
pub const DNS_RESOLVER_ENV: &str = "DNS_RESOLVER";

/// DNS query timeout in seconds.
///
/// A hung resolver stalls the whole flattening run, so keep this short.
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Number of attempts per DNS query. One attempt: a failed query aborts the
/// run rather than being retried.
pub const DNS_ATTEMPTS: usize = 1;
