//! Example: Working with GeminiError and ApiError.
//!
//! Run with: cargo run --example error_handling

use gemini_api_client::GeminiError;
use gemini_api_client::error::{ApiError, reason_codes};
use gemini_api_client::rest::{ClassifiedResponse, classify};

fn main() {
    let api_error = ApiError::new(reason_codes::INVALID_NONCE, "Nonce too low");
    println!("API error: {}", api_error);
    println!("Is invalid nonce: {}", api_error.is_invalid_nonce());
    println!("Is rate limit: {}", api_error.is_rate_limit());

    // Error envelopes are recognised before the body is decoded.
    let body = r#"{"result":"error","reason":"InsufficientFunds","message":"Not enough USD"}"#;
    match classify(body) {
        ClassifiedResponse::ApplicationError(inner) => {
            if inner.reason == reason_codes::INSUFFICIENT_FUNDS {
                println!("Matched known venue error: {}", inner.message);
            }
        }
        ClassifiedResponse::Success(_) => println!("Unexpected success"),
    }

    let err = GeminiError::Api(api_error);
    if let Some(inner) = err.api_error() {
        println!("Transport error: {}, reason: {}", err.is_transport(), inner.reason);
    }

    let status = GeminiError::HttpStatus {
        status: 502,
        body: "<html>Bad Gateway</html>".to_string(),
    };
    println!("{} (transport: {})", status, status.is_transport());
}
