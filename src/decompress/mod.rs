//! Gzip decompression of decoded bodies through a scratch file.
//!
//! Raw bodies are staged in an anonymous temporary file, rewound, and
//! decompressed by reading the file back.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::error_handling::InspectError;

/// Temporary storage for a body under inspection.
///
/// Backed by `tempfile::tempfile()`: the file is unlinked as soon as it is
/// created and its handle is closed on drop, so nothing outlives the value on
/// any path, including a failed decompression.
pub struct ScratchBuffer {
    file: File,
}

impl ScratchBuffer {
    /// Creates the buffer and fills it with `bytes`, positioned at the start.
    pub fn with_contents(bytes: &[u8]) -> io::Result<Self> {
        let mut file = tempfile::tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;
        file.seek(SeekFrom::Start(0))?;
        Ok(Self { file })
    }

    /// Decompresses the buffered gzip stream.
    ///
    /// Concatenated gzip members are decoded as one stream.
    pub fn gunzip(mut self) -> io::Result<Vec<u8>> {
        let mut decoder = MultiGzDecoder::new(&mut self.file);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)?;
        Ok(decompressed)
    }
}

/// Attempts to gunzip `raw`.
///
/// # Errors
///
/// Returns `InspectError::Scratch` if the scratch file cannot be created or
/// written, and `InspectError::Decompression` if the bytes are not a complete
/// gzip stream. Empty input decodes to an empty body, as reading an empty
/// gzip file does.
pub fn decompress_gzip(raw: &[u8]) -> Result<Vec<u8>, InspectError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let buffer = ScratchBuffer::with_contents(raw).map_err(InspectError::Scratch)?;
    let decompressed = buffer.gunzip().map_err(InspectError::Decompression)?;
    debug!(
        "Decompressed {} bytes into {} bytes",
        raw.len(),
        decompressed.len()
    );
    Ok(decompressed)
}
