//! Error type definitions.
//!
//! This module defines the error enums used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

use crate::dns::DnsError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS client (bad resolver endpoint).
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Failure modes of a single SPF record fetch.
///
/// All three kinds are terminal: there is no retry and no partial result.
/// Outer layers add the failing include domain via `anyhow::Context` without
/// changing the kind, so callers can still downcast to `SpfError`.
#[derive(Error, Debug)]
pub enum SpfError {
    /// Transport failure or non-success DNS response code.
    #[error("DNS query failed for {domain}: {source}")]
    QueryFailed {
        /// The domain whose TXT query failed.
        domain: String,
        /// The underlying DNS failure.
        #[source]
        source: DnsError,
    },

    /// DNS answered, but no TXT segment begins with the SPF version tag.
    #[error("no SPF record found for domain {domain}")]
    NoRecord {
        /// The domain that has no SPF record.
        domain: String,
    },

    /// A record was found but is empty or does not start with `v=spf1`.
    #[error("invalid SPF record: {record}")]
    InvalidRecord {
        /// The offending record text.
        record: String,
    },
}
