//! Configuration types and CLI options.
//!
//! This module defines the command-line interface and the enums used for
//! logging configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_RESOLVER, DNS_RESOLVER_ENV};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// At least one of `--ip4`, `--ip6`, or `--include` must be given; the binary
/// enforces this before resolution starts.
///
/// # Examples
///
/// ```bash
/// # Flatten a provider's SPF tree against a local resolver
/// spf_flatten --include example.com
///
/// # Combine manual entries with an include, tagging each output line
/// spf_flatten --ip4 198.51.100.1 --include example.com --tags
///
/// # Point at a different resolver (also settable via DNS_RESOLVER)
/// spf_flatten --include example.com --resolver 192.0.2.1:53
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "spf_flatten", version, about)]
pub struct Config {
    /// IPv4 address or CIDR to include verbatim (repeatable)
    #[arg(long = "ip4", value_name = "ADDR")]
    pub ip4: Vec<String>,

    /// IPv6 address or CIDR to include verbatim (repeatable)
    #[arg(long = "ip6", value_name = "ADDR")]
    pub ip6: Vec<String>,

    /// Domain whose SPF record should be recursively flattened (repeatable)
    #[arg(long = "include", value_name = "DOMAIN")]
    pub include: Vec<String>,

    /// Prefix each output line with an ip4: or ip6: family tag
    #[arg(long)]
    pub tags: bool,

    /// DNS resolver endpoint in host:port form
    #[arg(long, env = DNS_RESOLVER_ENV, default_value = DEFAULT_RESOLVER)]
    pub resolver: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Returns true if no seed input was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.ip4.is_empty() && self.ip6.is_empty() && self.include.is_empty()
    }
}
