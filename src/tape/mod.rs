//! Recorded HTTP traffic ("tapes").
//!
//! A tape is a JSON array of exchanges, each holding a `request` with a `url`
//! and a `response` with a base64 `body` and a `headers` map.

mod loader;
mod models;

pub use loader::{load_recording, parse_recording};
pub use models::{Exchange, RecordedRequest, RecordedResponse, Recording};
