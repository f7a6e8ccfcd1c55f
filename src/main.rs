//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `spf_flatten` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Output formatting (one entry per line, optionally family-tagged)
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use spf_flatten::initialization::init_logger_with;
use spf_flatten::spf::family_tag;
use spf_flatten::{run_flatten, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists) so
    // DNS_RESOLVER can be set without exporting it manually
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Seed validation is a CLI concern; the library accepts empty input
    if config.is_empty() {
        eprintln!("Error: At least one --ip4, --ip6, or --include argument is required");
        process::exit(1);
    }

    let tags = config.tags;
    match run_flatten(config).await {
        Ok(report) => {
            for entry in &report.entries {
                if tags {
                    println!("{}:{}", family_tag(entry), entry);
                } else {
                    println!("{entry}");
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
