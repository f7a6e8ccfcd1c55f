//! Configuration module.
//!
//! Contains CLI/configuration types and application constants.

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
