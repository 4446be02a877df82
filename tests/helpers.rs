// Shared test helpers for building tape fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as ENGINE;
use base64::Engine;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Gzip-compresses `bytes` with default settings.
pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).expect("Failed to compress");
    encoder.finish().expect("Failed to finish gzip stream")
}

/// Base64-encodes `bytes` the way recorders store response bodies.
pub fn b64(bytes: &[u8]) -> String {
    ENGINE.encode(bytes)
}

/// Builds one exchange object with a GET request and the given response body text.
pub fn exchange(url: &str, body: &str, headers: &[(&str, &str)]) -> Value {
    let headers: serde_json::Map<String, Value> = headers
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();
    json!({
        "request": {"url": url, "method": "GET"},
        "response": {"status": 200, "body": body, "headers": headers},
    })
}

/// Builds an exchange whose body is the gzip of `payload`.
#[allow(dead_code)] // Used by other test files
pub fn gzipped_exchange(url: &str, payload: &[u8]) -> Value {
    exchange(
        url,
        &b64(&gzip(payload)),
        &[("content-type", "text/plain"), ("content-encoding", "gzip")],
    )
}

/// Writes `exchanges` as a tape file inside `dir` and returns its path.
#[allow(dead_code)] // Used by other test files
pub fn write_tape(dir: &TempDir, exchanges: &[Value]) -> PathBuf {
    let path = dir.path().join("tape.json");
    let text = serde_json::to_string_pretty(&Value::Array(exchanges.to_vec()))
        .expect("Failed to serialize tape");
    std::fs::write(&path, text).expect("Failed to write tape");
    path
}
