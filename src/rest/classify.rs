//! Classification of Gemini response bodies.
//!
//! Gemini returns errors as a flat `{"result", "reason", "message"}` object,
//! and some success payloads carry a `result` field of their own. A body is
//! therefore probed for the error envelope first and only decoded into the
//! caller's type when the probe does not report a failure.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, GeminiError};

/// Outcome of probing a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedResponse<'a> {
    /// The venue reported an application-level failure.
    ApplicationError(ApiError),
    /// The body should be decoded as a success payload.
    Success(&'a str),
}

/// Probe a raw body for a venue error envelope.
pub fn classify(body: &str) -> ClassifiedResponse<'_> {
    // Derived struct decoding also accepts arrays; only objects are envelopes.
    if !body.trim_start().starts_with('{') {
        return ClassifiedResponse::Success(body);
    }
    match serde_json::from_str::<ApiError>(body) {
        Ok(probe) if probe.is_populated() && probe.result != "ok" => {
            ClassifiedResponse::ApplicationError(probe)
        }
        _ => ClassifiedResponse::Success(body),
    }
}

/// Classify a body and decode it into `T`.
pub fn decode<T>(body: &str) -> Result<T, GeminiError>
where
    T: DeserializeOwned,
{
    match classify(body) {
        ClassifiedResponse::ApplicationError(api_error) => Err(GeminiError::Api(api_error)),
        ClassifiedResponse::Success(body) => {
            serde_json::from_str(body).map_err(|source| GeminiError::Decode {
                source,
                body: body.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct OrderId {
        order_id: i64,
    }

    #[test]
    fn test_error_envelope_is_application_error() {
        let body = r#"{"result":"error","reason":"InvalidNonce","message":"nonce too low"}"#;
        match classify(body) {
            ClassifiedResponse::ApplicationError(err) => {
                assert_eq!(err.message, "nonce too low");
                assert_eq!(err.reason, "InvalidNonce");
            }
            other => panic!("unexpected classification: {other:?}"),
        }

        let err = decode::<OrderId>(body).unwrap_err();
        assert!(err.api_error().unwrap().is_invalid_nonce());
    }

    #[test]
    fn test_ok_result_decodes_payload() {
        let body = r#"{"order_id":123,"result":"ok"}"#;
        assert_eq!(classify(body), ClassifiedResponse::Success(body));
        assert_eq!(decode::<OrderId>(body).unwrap().order_id, 123);
    }

    #[test]
    fn test_message_without_result_is_error() {
        let body = r#"{"message":"Bad request"}"#;
        assert!(matches!(
            classify(body),
            ClassifiedResponse::ApplicationError(_)
        ));
    }

    #[test]
    fn test_arrays_skip_probe() {
        let body = r#"["btcusd","ethusd"]"#;
        let symbols: Vec<String> = decode(body).unwrap();
        assert_eq!(symbols, vec!["btcusd", "ethusd"]);
    }

    #[test]
    fn test_plain_object_without_envelope_fields() {
        let body = r#"{"order_id":5}"#;
        assert_eq!(decode::<OrderId>(body).unwrap().order_id, 5);
    }

    #[test]
    fn test_shape_mismatch_is_decode_error() {
        let body = r#"{"result":"ok","unexpected":true}"#;
        match decode::<OrderId>(body).unwrap_err() {
            GeminiError::Decode { body: raw, .. } => assert_eq!(raw, body),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_json_is_decode_error() {
        let err = decode::<OrderId>("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, GeminiError::Decode { .. }));
    }
}
