//! # Gemini Client
//!
//! An async Rust client library for the Gemini exchange REST API.
//!
//! ## Features
//!
//! - Multiple API keys and roles in one process through a session registry
//! - HMAC-SHA384 payload signing with per-account nonces
//! - Venue error envelopes classified before decoding
//! - Strong typing for request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gemini_api_client::auth::{Role, SessionRegistry};
//! use gemini_api_client::rest::GeminiRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = Arc::new(SessionRegistry::new());
//!     registry.add_session(1, "trader_key", "trader_secret", Role::Trader, false)?;
//!     registry.add_session(2, "funds_key", "funds_secret", Role::FundManager, false)?;
//!
//!     let trader = GeminiRestClient::builder().account(registry.bind(1)?).build();
//!     let balances = trader.get_balances().await?;
//!     println!("Balances: {:?}", balances);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rate_limit;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::GeminiError;
pub use types::common::{OrderOption, OrderType, Side};

/// Result type alias using GeminiError
pub type Result<T> = std::result::Result<T, GeminiError>;
