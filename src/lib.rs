//! spf_flatten library: SPF record flattening.
//!
//! Resolves an email domain's SPF authorization into a flat, deduplicated
//! list of IPv4/IPv6 addresses and CIDR ranges, recursively expanding nested
//! `include:` references. Useful when firewall rules or relay configuration
//! need a concrete allow-list instead of a policy string that requires
//! runtime DNS lookups.
//!
//! # Example
//!
//! ```no_run
//! use spf_flatten::{run_flatten, Config};
//! use clap::Parser;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from([
//!     "spf_flatten",
//!     "--include", "example.com",
//!     "--resolver", "192.0.2.1:53",
//! ]);
//!
//! let report = run_flatten(config).await?;
//! for entry in &report.entries {
//!     println!("{entry}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod dns;
mod error_handling;
pub mod initialization;
pub mod spf;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, SpfError};
pub use run::{run_flatten, FlattenReport};

// Internal run module (top-level orchestration over the configured resolver)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::initialization::init_dns_client;
    use crate::spf::flatten;

    /// Results of one flattening run.
    #[derive(Debug, Clone)]
    pub struct FlattenReport {
        /// Deduplicated address/CIDR entries, in first-occurrence order.
        pub entries: Vec<String>,
        /// Number of top-level include domains that were resolved.
        pub includes_resolved: usize,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs a flattening pass with the provided configuration.
    ///
    /// This is the main entry point for the library: it builds a DNS client
    /// for the configured resolver endpoint, seeds the accumulator with the
    /// manual `ip4`/`ip6` entries, recursively resolves every include
    /// domain, and returns the deduplicated result.
    ///
    /// # Errors
    ///
    /// Fails if the resolver endpoint is invalid or if any include domain in
    /// the tree cannot be resolved to a valid SPF record. There is no
    /// partial result: one unreachable domain fails the whole run.
    pub async fn run_flatten(config: Config) -> Result<FlattenReport> {
        let start = std::time::Instant::now();

        let client = init_dns_client(&config.resolver)
            .context("Failed to initialize DNS client")?;

        let entries = flatten(&client, &config.ip4, &config.ip6, &config.include).await?;

        let elapsed_seconds = start.elapsed().as_secs_f64();
        info!(
            "flattened {} include domain(s) into {} unique entries in {:.2}s",
            config.include.len(),
            entries.len(),
            elapsed_seconds
        );

        Ok(FlattenReport {
            entries,
            includes_resolved: config.include.len(),
            elapsed_seconds,
        })
    }
}
