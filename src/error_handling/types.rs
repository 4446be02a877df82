//! Error type definitions.
//!
//! This module defines the errors raised by each inspection stage and during
//! initialization.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, DisplayMacro)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    Load,
    Decode,
    Decompress,
    Output,
}

/// Errors that stop an inspection run.
///
/// None of these are recovered locally; they propagate to the binary, which
/// reports them and exits non-zero.
#[derive(Error, Debug)]
pub enum InspectError {
    /// The tape could not be read.
    #[error("failed to read tape {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tape is not valid JSON.
    #[error("tape is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The tape is valid JSON but not a sequence of exchanges.
    #[error("{}", shape_message(.index, .reason))]
    Shape { index: Option<usize>, reason: String },

    /// The response body is not valid base64.
    #[error("response body of {url} is not valid base64: {source}")]
    Decode {
        url: String,
        #[source]
        source: base64::DecodeError,
    },

    /// The temporary file holding the body could not be created or written.
    #[error("failed to stage response body in a temporary file: {0}")]
    Scratch(#[source] std::io::Error),

    /// The decoded body is not gzip data.
    #[error("response body is not valid gzip data: {0}")]
    Decompression(#[source] std::io::Error),

    /// Writing to the observation channel failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

fn shape_message(index: &Option<usize>, reason: &str) -> String {
    match index {
        Some(i) => format!("exchange #{i} has an unexpected shape: {reason}"),
        None => format!("tape has an unexpected shape: {reason}"),
    }
}

impl InspectError {
    /// Stage the error was raised in.
    pub fn stage(&self) -> Stage {
        match self {
            InspectError::Io { .. } | InspectError::Parse(_) | InspectError::Shape { .. } => {
                Stage::Load
            }
            InspectError::Decode { .. } => Stage::Decode,
            InspectError::Scratch(_) | InspectError::Decompression(_) => Stage::Decompress,
            InspectError::Output(_) => Stage::Output,
        }
    }
}
