//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default tape path, env variable names, output labels)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, DecompressFailurePolicy, LogFormat, LogLevel};
