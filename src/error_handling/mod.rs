//! Error handling.
//!
//! This module provides:
//! - Stage errors for the inspection pipeline (load, decode, decompress, output)
//! - Initialization errors
//! - The `Stage` an error belongs to, used to label diagnostics

mod types;

// Re-export public API
pub use types::{InitializationError, InspectError, Stage};
