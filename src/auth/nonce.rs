//! Nonce generation for Gemini API authentication.
//!
//! Gemini rejects any authenticated request whose nonce is not greater than
//! the last nonce it saw for the same API key.

use std::sync::atomic::{AtomicI64, Ordering};

use time::OffsetDateTime;

/// Trait for providing nonces for authenticated requests.
///
/// The nonce must be strictly increasing for each request.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must be greater than any previously returned value.
    fn next_nonce(&self) -> i64;
}

/// A nonce provider seeded from the wall clock on first use.
///
/// The first call returns nanoseconds since the UNIX epoch; every later call
/// returns the previous value plus one. The clock is read only once, so a
/// clock that moves backwards after seeding has no effect on the sequence.
#[derive(Debug)]
pub struct ClockSeededNonce {
    last_nonce: AtomicI64,
}

impl ClockSeededNonce {
    /// Create a new, unseeded nonce provider.
    pub fn new() -> Self {
        Self {
            last_nonce: AtomicI64::new(0),
        }
    }

    /// The last issued nonce, or `None` if the counter is still unseeded.
    pub fn last(&self) -> Option<i64> {
        match self.last_nonce.load(Ordering::SeqCst) {
            0 => None,
            n => Some(n),
        }
    }

    fn current_time_nanos() -> i64 {
        let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
        i64::try_from(nanos).unwrap_or(i64::MAX / 2).max(1)
    }
}

impl Default for ClockSeededNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for ClockSeededNonce {
    fn next_nonce(&self) -> i64 {
        // Seed and increment happen inside one compare-and-swap, so concurrent
        // callers can never observe the same value.
        let mut issued = 0;
        // The closure always returns `Some`, so the update cannot fail.
        let _previous = self
            .last_nonce
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                issued = if last == 0 {
                    Self::current_time_nanos()
                } else {
                    last + 1
                };
                Some(issued)
            });
        issued
    }
}
