//! Response body decoding.

use base64::engine::general_purpose::STANDARD as ENGINE;
use base64::Engine;

use crate::error_handling::InspectError;
use crate::tape::Exchange;

/// Decodes the base64 response body of `exchange` into raw bytes.
///
/// ASCII whitespace is ignored so line-wrapped bodies decode; any other
/// character outside the standard alphabet, or bad padding, is an error.
///
/// # Errors
///
/// Returns `InspectError::Decode` naming the exchange's request URL.
pub fn decode_body(exchange: &Exchange) -> Result<Vec<u8>, InspectError> {
    decode_base64(&exchange.response.body).map_err(|source| InspectError::Decode {
        url: exchange.request.url.clone(),
        source,
    })
}

fn decode_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if text.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: Vec<u8> = text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        ENGINE.decode(compact)
    } else {
        ENGINE.decode(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tape::parse_recording;

    fn exchange_with_body(body: &str) -> Exchange {
        let tape = format!(
            r#"[{{"request":{{"url":"https://a.test/x"}},"response":{{"body":{},"headers":{{}}}}}}]"#,
            serde_json::to_string(body).unwrap()
        );
        parse_recording(&tape).unwrap().exchanges()[0].clone()
    }

    #[test]
    fn test_decode_plain_body() {
        let exchange = exchange_with_body("aGVsbG8=");
        assert_eq!(decode_body(&exchange).unwrap(), b"hello");
    }

    #[test]
    fn test_decode_empty_body() {
        let exchange = exchange_with_body("");
        assert!(decode_body(&exchange).unwrap().is_empty());
    }

    #[test]
    fn test_decode_line_wrapped_body() {
        let exchange = exchange_with_body("aGVs\nbG8g\r\nd29y bGQ=");
        assert_eq!(decode_body(&exchange).unwrap(), b"hello world");
    }

    #[test]
    fn test_round_trip_arbitrary_bytes() {
        let bytes: Vec<u8> = (0..=255u8).rev().collect();
        let exchange = exchange_with_body(&ENGINE.encode(&bytes));
        assert_eq!(decode_body(&exchange).unwrap(), bytes);
    }

    #[test]
    fn test_invalid_character_is_decode_error() {
        let exchange = exchange_with_body("not*base64");
        match decode_body(&exchange).unwrap_err() {
            InspectError::Decode { url, .. } => assert_eq!(url, "https://a.test/x"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_padding_is_decode_error() {
        let exchange = exchange_with_body("aGVsbG8");
        assert!(matches!(
            decode_body(&exchange),
            Err(InspectError::Decode { .. })
        ));
    }
}
