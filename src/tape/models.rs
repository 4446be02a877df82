//! Tape data model.
//!
//! Fields the inspector does not interpret are kept in flattened maps so the
//! recorded objects can be printed back as they appear in the tape.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The request half of a recorded exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub url: String,
    /// Method, headers, body and anything else the recorder stored.
    #[serde(flatten)]
    pub metadata: IndexMap<String, Value>,
}

/// The response half of a recorded exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedResponse {
    /// Base64 text; the decoded bytes may be gzip-compressed.
    pub body: String,
    pub headers: IndexMap<String, String>,
    #[serde(flatten)]
    pub metadata: IndexMap<String, Value>,
}

/// One captured request/response pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub request: RecordedRequest,
    pub response: RecordedResponse,
}

/// An ordered, read-only sequence of exchanges loaded from a tape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recording {
    exchanges: Vec<Exchange>,
}

impl Recording {
    pub fn new(exchanges: Vec<Exchange>) -> Self {
        Self { exchanges }
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_are_preserved_in_order() {
        let json = r#"{
            "request": {"method": "GET", "url": "https://a.test/x", "headers": {"accept": "*/*"}},
            "response": {"status": 200, "body": "", "headers": {"x-b": "2", "x-a": "1"}}
        }"#;
        let exchange: Exchange = serde_json::from_str(json).expect("Failed to deserialize");

        assert_eq!(exchange.request.url, "https://a.test/x");
        let keys: Vec<&str> = exchange.request.metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["method", "headers"]);
        assert_eq!(exchange.response.metadata["status"], 200);

        let header_names: Vec<&str> = exchange
            .response
            .headers
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(header_names, vec!["x-b", "x-a"]);
    }

    #[test]
    fn test_request_without_url_is_rejected() {
        let json = r#"{"request": {"method": "GET"}, "response": {"body": "", "headers": {}}}"#;
        let result: Result<Exchange, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_string_header_value_is_rejected() {
        let json = r#"{"request": {"url": "u"}, "response": {"body": "", "headers": {"x": 1}}}"#;
        let result: Result<Exchange, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_recording_accessors() {
        let recording = Recording::default();
        assert!(recording.is_empty());
        assert_eq!(recording.len(), 0);
        assert!(recording.exchanges().is_empty());
    }
}
