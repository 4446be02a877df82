//! Observation output for a matched exchange.

use std::fmt;
use std::io::Write;

use crate::config::{BODY_LABEL, HEADERS_LABEL};
use crate::error_handling::InspectError;
use crate::tape::Exchange;

/// Displays bytes as a byte-string literal, e.g. `b'hi\n\x1f'`.
///
/// Single quotes delimit the literal unless the bytes contain `'` and no `"`,
/// in which case double quotes are used and `'` is left unescaped.
pub struct ByteLiteral<'a>(pub &'a [u8]);

impl fmt::Display for ByteLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = if self.0.contains(&b'\'') && !self.0.contains(&b'"') {
            b'"'
        } else {
            b'\''
        };

        write!(f, "b{}", quote as char)?;
        for &byte in self.0 {
            match byte {
                b'\\' => f.write_str("\\\\")?,
                b if b == quote => write!(f, "\\{}", b as char)?,
                b'\t' => f.write_str("\\t")?,
                b'\n' => f.write_str("\\n")?,
                b'\r' => f.write_str("\\r")?,
                0x20..=0x7e => write!(f, "{}", byte as char)?,
                _ => write!(f, "\\x{byte:02x}")?,
            }
        }
        write!(f, "{}", quote as char)
    }
}

/// Prints the matched request object as compact JSON.
pub fn write_request<W: Write>(out: &mut W, exchange: &Exchange) -> Result<(), InspectError> {
    let request = serde_json::to_string(&exchange.request).map_err(std::io::Error::from)?;
    writeln!(out, "{request}")?;
    Ok(())
}

/// Prints the decoded body before decompression, then the response headers.
pub fn write_raw_body<W: Write>(
    out: &mut W,
    exchange: &Exchange,
    raw: &[u8],
) -> Result<(), InspectError> {
    let headers =
        serde_json::to_string(&exchange.response.headers).map_err(std::io::Error::from)?;
    writeln!(out, "{BODY_LABEL} {}", ByteLiteral(raw))?;
    writeln!(out, "{HEADERS_LABEL} {headers}")?;
    Ok(())
}

/// Prints the decompressed body.
pub fn write_decompressed<W: Write>(out: &mut W, bytes: &[u8]) -> Result<(), InspectError> {
    writeln!(out, "{}", ByteLiteral(bytes))?;
    Ok(())
}
