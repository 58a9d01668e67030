//! Common types used across the Gemini client library.

pub mod common;

pub use common::*;
