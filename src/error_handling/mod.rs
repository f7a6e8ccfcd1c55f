//! Error handling module.
//!
//! Defines the error types for initialization and SPF resolution failures.

mod types;

pub use types::{InitializationError, SpfError};
