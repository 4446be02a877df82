//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{DEFAULT_TAPE_PATH, ENV_TAPE, ENV_TARGET_URL};

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
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// What to do when the matched body is not valid gzip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DecompressFailurePolicy {
    /// Stop the run with a decompression error (default)
    Fail,
    /// Log a warning and continue; the raw body has already been printed
    Warn,
}

/// Inspector configuration.
///
/// Doubles as the CLI definition; library users can build it directly.
///
/// # Examples
///
/// ```no_run
/// use tape_inspector::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     tape: PathBuf::from("tapes/session.json"),
///     target_url: Some("https://a.test/x".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tape_inspector",
    version,
    about = "List the URLs in a recorded HTTP tape and decode the response body of a target exchange"
)]
pub struct Config {
    /// Tape file to inspect (JSON array of exchanges), or `-` for stdin
    #[arg(env = ENV_TAPE, default_value = DEFAULT_TAPE_PATH)]
    pub tape: PathBuf,

    /// Exact request URL whose response should be decoded
    #[arg(long, env = ENV_TARGET_URL)]
    pub target_url: Option<String>,

    /// Keep scanning after the first match and decode every matching exchange
    #[arg(long)]
    pub all_matches: bool,

    /// Behaviour when the decoded body is not gzip data
    #[arg(long, value_enum, default_value_t = DecompressFailurePolicy::Fail)]
    pub on_decompress_error: DecompressFailurePolicy,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tape: PathBuf::from(DEFAULT_TAPE_PATH),
            target_url: None,
            all_matches: false,
            on_decompress_error: DecompressFailurePolicy::Fail,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// Human-readable explanation
    pub message: String,
}

impl Config {
    /// Checks values clap cannot express as constraints.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.tape.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "tape",
                message: "tape path must not be empty (use `-` to read from stdin)".to_string(),
            });
        }
        if let Some(target) = &self.target_url {
            if target.trim().is_empty() {
                return Err(ConfigValidationError {
                    field: "target_url",
                    message: format!(
                        "target URL must not be blank; unset {ENV_TARGET_URL} to only list URLs"
                    ),
                });
            }
        }
        Ok(())
    }
}
