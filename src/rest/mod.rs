//! Gemini REST API client.
//!
//! Provides the public market data endpoints and the signed private
//! endpoints, plus the response classifier they share.

pub mod classify;
mod client;
pub mod endpoints;
pub mod private;
pub mod public;

pub use classify::{ClassifiedResponse, classify, decode};
pub use client::{GeminiRestClient, GeminiRestClientBuilder};
pub use endpoints::{API_VERSION, GEMINI_BASE_URL, GEMINI_SANDBOX_URL};
