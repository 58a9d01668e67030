//! Authentication module for Gemini API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - A session registry for running several API keys and roles at once
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA384 payload signing for authenticated requests

mod account;
mod credentials;
mod nonce;
mod session;
mod signature;

pub use account::Account;
pub use credentials::{Credentials, CredentialsProvider, EnvCredentials};
pub use nonce::{ClockSeededNonce, NonceProvider};
pub use session::{Role, Session, SessionId, SessionRegistry};
pub use signature::{RequestEnvelope, SignedHeaders, sign_envelope, sign_payload};
