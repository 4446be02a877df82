//! Application initialization.
//!
//! The inspector has a single shared resource to set up before running: the
//! logger. Initialization functions return proper error types for error handling.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
