//! HMAC-SHA384 payload signing for Gemini private endpoints.
//!
//! Gemini authenticates a request through three headers rather than the body:
//! ```text
//! X-GEMINI-APIKEY    = api_key
//! X-GEMINI-PAYLOAD   = base64(json(envelope))
//! X-GEMINI-SIGNATURE = hex(HMAC-SHA384(X-GEMINI-PAYLOAD, api_secret))
//! ```
//!
//! where `envelope` is `{"request": "/v1/<path>", "nonce": <n>, ...params}`.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::Sha384;

use crate::auth::Credentials;
use crate::error::GeminiError;
use crate::rest::endpoints::API_VERSION;

type HmacSha384 = Hmac<Sha384>;

/// The JSON object that is serialized, encoded and signed.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEnvelope {
    fields: Map<String, Value>,
}

impl RequestEnvelope {
    /// Start an envelope for `path` (relative, e.g. `"order/new"`).
    pub fn new(path: &str, nonce: i64) -> Self {
        let mut fields = Map::new();
        fields.insert(
            "request".to_string(),
            Value::String(format!("/v{API_VERSION}/{path}")),
        );
        fields.insert("nonce".to_string(), Value::from(nonce));
        Self { fields }
    }

    /// Merge caller parameters into the envelope.
    ///
    /// `params` must serialize to a JSON object (or to `null`/unit for no
    /// parameters). Parameters are merged last, so a parameter named
    /// `request` or `nonce` replaces the generated value.
    pub fn with_params<P>(self, params: &P) -> Result<Self, GeminiError>
    where
        P: Serialize + ?Sized,
    {
        Ok(self.merge(params_to_object(params)?))
    }

    pub(crate) fn merge(mut self, params: Map<String, Value>) -> Self {
        self.fields.extend(params);
        self
    }

    /// The `request` field.
    pub fn request_path(&self) -> Option<&str> {
        self.fields.get("request").and_then(Value::as_str)
    }

    /// The `nonce` field.
    pub fn nonce(&self) -> Option<i64> {
        self.fields.get("nonce").and_then(Value::as_i64)
    }

    /// Look up any field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Serialize the envelope to JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>, GeminiError> {
        Ok(serde_json::to_vec(&self.fields)?)
    }
}

/// Serialize request parameters into the map merged into an envelope.
pub(crate) fn params_to_object<P>(params: &P) -> Result<Map<String, Value>, GeminiError>
where
    P: Serialize + ?Sized,
{
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(GeminiError::InvalidParams(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

/// Authentication headers for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Value for `X-GEMINI-APIKEY`.
    pub api_key: String,
    /// Value for `X-GEMINI-PAYLOAD`.
    pub payload_base64: String,
    /// Value for `X-GEMINI-SIGNATURE`.
    pub signature_hex: String,
}

impl SignedHeaders {
    /// The envelope JSON carried by the payload header.
    pub fn payload_json(&self) -> Option<String> {
        BASE64
            .decode(&self.payload_base64)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }
}

/// Sign an envelope with the given credentials.
///
/// The result depends only on the secret and the envelope bytes.
///
/// # Example
///
/// ```rust
/// use gemini_api_client::auth::{Credentials, RequestEnvelope, sign_envelope};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let envelope = RequestEnvelope::new("balances", 1_700_000_000_000_000_000);
/// let headers = sign_envelope(&credentials, &envelope)?;
/// assert_eq!(headers.signature_hex.len(), 96);
/// # Ok(())
/// # }
/// ```
pub fn sign_envelope(
    credentials: &Credentials,
    envelope: &RequestEnvelope,
) -> Result<SignedHeaders, GeminiError> {
    let payload_json = envelope.to_json()?;
    let payload_base64 = BASE64.encode(payload_json);
    let signature_hex = sign_payload(credentials, &payload_base64)?;

    Ok(SignedHeaders {
        api_key: credentials.api_key.clone(),
        payload_base64,
        signature_hex,
    })
}

/// Compute `hex(HMAC-SHA384(payload_base64, secret))`.
pub fn sign_payload(credentials: &Credentials, payload_base64: &str) -> Result<String, GeminiError> {
    let mut hmac = HmacSha384::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| GeminiError::InvalidParams(format!("Invalid HMAC key: {e}")))?;
    hmac.update(payload_base64.as_bytes());
    Ok(hex::encode(hmac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn order_params() -> Value {
        json!({
            "symbol": "btcusd",
            "amount": "1.0",
            "price": "100.0",
            "side": "buy",
            "type": "exchange limit"
        })
    }

    #[test]
    fn test_envelope_fields() {
        let envelope = RequestEnvelope::new("order/new", 42)
            .with_params(&order_params())
            .unwrap();
        assert_eq!(envelope.request_path(), Some("/v1/order/new"));
        assert_eq!(envelope.nonce(), Some(42));
        assert_eq!(envelope.get("symbol"), Some(&json!("btcusd")));
    }

    #[test]
    fn test_params_overwrite_generated_fields() {
        let envelope = RequestEnvelope::new("balances", 42)
            .with_params(&json!({ "nonce": 7 }))
            .unwrap();
        assert_eq!(envelope.nonce(), Some(7));
    }

    #[test]
    fn test_unit_params_are_empty() {
        let envelope = RequestEnvelope::new("balances", 1).with_params(&()).unwrap();
        assert_eq!(envelope, RequestEnvelope::new("balances", 1));
    }

    #[test]
    fn test_non_object_params_rejected() {
        let err = RequestEnvelope::new("balances", 1)
            .with_params(&vec![1, 2, 3])
            .unwrap_err();
        assert!(matches!(err, GeminiError::InvalidParams(_)));
    }

    #[test]
    fn test_payload_is_base64_of_envelope_json() {
        let credentials = Credentials::new("key", "secret");
        let envelope = RequestEnvelope::new("balances", 12345);
        let headers = sign_envelope(&credentials, &envelope).unwrap();

        let decoded = BASE64.decode(&headers.payload_base64).unwrap();
        let parsed: Value = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(parsed, json!({ "request": "/v1/balances", "nonce": 12345 }));
        assert_eq!(headers.api_key, "key");
    }

    #[test]
    fn test_payload_json_reads_back_envelope() {
        let credentials = Credentials::new("key", "secret");
        let envelope = RequestEnvelope::new("balances", 12345);
        let headers = sign_envelope(&credentials, &envelope).unwrap();

        let payload = headers.payload_json().unwrap();
        let parsed: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed, json!({ "request": "/v1/balances", "nonce": 12345 }));
        assert!(!payload.contains("secret"));

        let garbled = SignedHeaders {
            payload_base64: "not base64!".to_string(),
            ..headers
        };
        assert!(garbled.payload_json().is_none());
    }

    #[test]
    fn test_signature_matches_manual_hmac() {
        let credentials = Credentials::new("key", "secret");
        let payload = BASE64.encode(br#"{"nonce":1,"request":"/v1/balances"}"#);

        let mut mac = HmacSha384::new_from_slice(b"secret").unwrap();
        mac.update(payload.as_bytes());
        let expected = hex::encode(mac.finalize().into_bytes());

        assert_eq!(sign_payload(&credentials, &payload).unwrap(), expected);
        // SHA-384 produces 48 bytes, hex encoded = 96 chars
        assert_eq!(expected.len(), 96);
    }

    #[test]
    fn test_signature_consistency() {
        let credentials = Credentials::new("key", "my_secret");
        let envelope = RequestEnvelope::new("order/new", 12345)
            .with_params(&order_params())
            .unwrap();

        let sig1 = sign_envelope(&credentials, &envelope).unwrap();
        let sig2 = sign_envelope(&credentials, &envelope).unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_each_input() {
        let base_creds = Credentials::new("key", "my_secret");
        let base = RequestEnvelope::new("order/new", 12345)
            .with_params(&order_params())
            .unwrap();

        let variants = vec![
            sign_envelope(&base_creds, &base).unwrap(),
            sign_envelope(&Credentials::new("key", "other_secret"), &base).unwrap(),
            sign_envelope(
                &base_creds,
                &RequestEnvelope::new("order/cancel", 12345)
                    .with_params(&order_params())
                    .unwrap(),
            )
            .unwrap(),
            sign_envelope(
                &base_creds,
                &RequestEnvelope::new("order/new", 12346)
                    .with_params(&order_params())
                    .unwrap(),
            )
            .unwrap(),
            sign_envelope(
                &base_creds,
                &RequestEnvelope::new("order/new", 12345)
                    .with_params(&json!({ "symbol": "ethusd" }))
                    .unwrap(),
            )
            .unwrap(),
        ];

        let signatures: HashSet<_> = variants.iter().map(|h| h.signature_hex.clone()).collect();
        assert_eq!(signatures.len(), variants.len());
    }

    #[test]
    fn test_signature_never_contains_secret() {
        let credentials = Credentials::new("key", "plain_secret_value");
        let headers = sign_envelope(&credentials, &RequestEnvelope::new("balances", 1)).unwrap();
        let debug = format!("{headers:?}");
        assert!(!debug.contains("plain_secret_value"));
    }
}
