//! Error types for the Gemini client library.

use thiserror::Error;

use crate::auth::{Role, SessionId};

/// The main error type for all Gemini client operations.
#[derive(Error, Debug)]
pub enum GeminiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// The venue answered with a non-success status and a body that is not a
    /// venue error envelope.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Request envelope could not be serialized to JSON
    #[error("Failed to encode request payload: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Request parameters did not serialize to a JSON object
    #[error("Invalid request parameters: {0}")]
    InvalidParams(String),

    /// Gemini API returned an error envelope
    #[error("Gemini API error: {0}")]
    Api(ApiError),

    /// A success response did not match the expected shape
    #[error("Failed to decode response: {source}. Body: {body}")]
    Decode {
        /// Underlying JSON error
        source: serde_json::Error,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// Session identifier is already registered
    #[error("Session {0} is already registered")]
    DuplicateSession(SessionId),

    /// Session identifier was never registered
    #[error("Session {0} is not registered")]
    UnknownSession(SessionId),

    /// Role check failed for a privileged endpoint
    #[error("Permission denied: {0}")]
    Permission(#[from] PermissionError),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for private endpoints")]
    MissingCredentials,
}

impl GeminiError {
    /// Whether the error originated in the HTTP transport rather than in the
    /// venue or in this crate.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GeminiError::Http(_) | GeminiError::HttpMiddleware(_) | GeminiError::HttpStatus { .. }
        )
    }

    /// The venue error envelope, if this is an application-level failure.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            GeminiError::Api(api_error) => Some(api_error),
            _ => None,
        }
    }
}

/// Role check failures raised before a privileged request is signed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// The account was not bound from a registered session.
    #[error("no session established for this account")]
    NoSessionEstablished,

    /// The session's role does not match the one the endpoint requires.
    #[error("role {actual} cannot call an endpoint requiring {required}")]
    RoleMismatch {
        /// Role the endpoint requires
        required: Role,
        /// Role bound to the session
        actual: Role,
    },
}

/// Gemini error envelope.
///
/// Returned by the API in the response body as
/// `{"result": "error", "reason": "...", "message": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ApiError {
    /// Result marker, anything but `"ok"` signals failure
    #[serde(default)]
    pub result: String,
    /// Short machine-readable reason (e.g. "InvalidNonce")
    #[serde(default)]
    pub reason: String,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.reason, self.message)
        }
    }
}

impl ApiError {
    /// Create a new API error from reason and message.
    pub fn new(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            result: "error".to_string(),
            reason: reason.into(),
            message: message.into(),
        }
    }

    /// Whether any of the envelope fields carries a value.
    pub fn is_populated(&self) -> bool {
        !self.result.is_empty() || !self.reason.is_empty() || !self.message.is_empty()
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.reason == reason_codes::RATE_LIMITED || self.reason == reason_codes::RATE_LIMIT
    }

    /// Check if this is an invalid nonce error.
    pub fn is_invalid_nonce(&self) -> bool {
        self.reason == reason_codes::INVALID_NONCE
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.reason == reason_codes::INVALID_SIGNATURE
    }

    /// Check if this is a missing role error.
    pub fn is_missing_role(&self) -> bool {
        self.reason == reason_codes::MISSING_ROLE
    }
}

/// Known Gemini error reasons.
pub mod reason_codes {
    pub const INVALID_NONCE: &str = "InvalidNonce";
    pub const INVALID_SIGNATURE: &str = "InvalidSignature";
    pub const MISSING_ROLE: &str = "MissingRole";
    pub const INSUFFICIENT_FUNDS: &str = "InsufficientFunds";
    pub const ORDER_NOT_FOUND: &str = "OrderNotFound";
    pub const INVALID_SYMBOL: &str = "InvalidSymbol";
    pub const RATE_LIMITED: &str = "RateLimited";
    pub const RATE_LIMIT: &str = "RateLimit";
    pub const MAINTENANCE: &str = "Maintenance";
}
