//! Tape loading.
//!
//! The whole document is read into memory and validated in two passes: JSON
//! syntax first, then the shape of each exchange, so the two failure kinds
//! stay distinguishable. Recorders conventionally gzip their tapes; such
//! files are recognised by the gzip magic bytes and inflated before parsing.

use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;
use serde_json::Value;

use crate::config::STDIN_PATH;
use crate::error_handling::InspectError;
use crate::tape::models::{Exchange, Recording};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Parses tape text into a [`Recording`].
///
/// # Errors
///
/// - `InspectError::Parse` if the text is not valid JSON
/// - `InspectError::Shape` if the document is not an array of exchanges
pub fn parse_recording(text: &str) -> Result<Recording, InspectError> {
    parse_document(text.as_bytes())
}

fn parse_document(bytes: &[u8]) -> Result<Recording, InspectError> {
    let document: Value = serde_json::from_slice(bytes).map_err(InspectError::Parse)?;

    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(InspectError::Shape {
                index: None,
                reason: format!("expected an array of exchanges, found {}", kind_of(&other)),
            })
        }
    };

    let exchanges = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Exchange>(item).map_err(|e| InspectError::Shape {
                index: Some(index),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Recording::new(exchanges))
}

/// Reads and parses the tape at `path`; `-` reads stdin.
///
/// Gzipped tapes are inflated first.
///
/// # Errors
///
/// Returns `InspectError::Io` if the tape cannot be read or a gzipped tape
/// is corrupt, otherwise the errors of [`parse_recording`].
pub fn load_recording(path: &Path) -> Result<Recording, InspectError> {
    let io_error = |source: std::io::Error| InspectError::Io {
        path: path.to_path_buf(),
        source,
    };

    let bytes = if path.as_os_str() == STDIN_PATH {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .map_err(io_error)?;
        bytes
    } else {
        std::fs::read(path).map_err(io_error)?
    };
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let bytes = if bytes.starts_with(&GZIP_MAGIC) {
        let mut inflated = Vec::new();
        MultiGzDecoder::new(bytes.as_slice())
            .read_to_end(&mut inflated)
            .map_err(io_error)?;
        debug!("Inflated gzipped tape to {} bytes", inflated.len());
        inflated
    } else {
        bytes
    };

    let recording = parse_document(&bytes)?;
    debug!("Loaded {} exchanges", recording.len());
    Ok(recording)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
