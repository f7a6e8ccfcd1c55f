//! DNS TXT lookup abstraction.
//!
//! The resolution core only needs one DNS operation: a TXT query returning
//! the individual character-string segments of every answer record. That
//! operation is behind the [`TxtClient`] trait so the recursive resolver can
//! be exercised in tests without touching the network ([`MockTxtClient`]),
//! while production uses the hickory-backed [`HickoryClient`].

use std::future::Future;

use thiserror::Error;

mod client;
mod mock;

pub use client::HickoryClient;
pub use mock::MockTxtClient;

/// Failure modes of a TXT query.
///
/// An empty-but-successful answer is not an error; clients return `Ok` with
/// an empty segment list for that case.
#[derive(Debug, Clone, Error)]
pub enum DnsError {
    /// The server answered with a non-success response code (NXDOMAIN,
    /// SERVFAIL, ...).
    #[error("DNS query returned error code: {0}")]
    ResponseCode(String),

    /// The query never produced an answer (I/O error, timeout, protocol
    /// failure).
    #[error("DNS transport error: {0}")]
    Transport(String),
}

/// A client capable of TXT lookups.
///
/// `query_txt` takes the fully-qualified form of a domain (trailing dot) and
/// returns one string per TXT character-string segment, across all answer
/// records in answer order.
pub trait TxtClient: Send + Sync {
    /// Performs a TXT query for `fqdn`.
    fn query_txt(&self, fqdn: &str)
        -> impl Future<Output = Result<Vec<String>, DnsError>> + Send;
}

/// Returns the fully-qualified form of `domain` (with a trailing dot).
pub fn fqdn(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{domain}.")
    }
}
