//! Configuration constants.
//!
//! Defaults, environment variable names, and the labels printed on the
//! observation channel.

/// Tape path used when neither the CLI argument nor `TAPE_INSPECTOR_TAPE` is set.
pub const DEFAULT_TAPE_PATH: &str = "./tape-directory/tape.json";

/// Path value that reads the tape from stdin instead of a file.
pub const STDIN_PATH: &str = "-";

pub const ENV_TAPE: &str = "TAPE_INSPECTOR_TAPE";
pub const ENV_TARGET_URL: &str = "TAPE_INSPECTOR_TARGET_URL";

// Observation channel labels
pub const BODY_LABEL: &str = "Body";
pub const HEADERS_LABEL: &str = "Headers";
