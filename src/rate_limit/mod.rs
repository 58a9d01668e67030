//! Gemini's documented request limits.
//!
//! The client never throttles requests itself. These constants and quotas
//! are for callers that want to put their own limiter in front of it; when
//! the venue is overloaded it answers with HTTP 429, which surfaces like any
//! other error.
//!
//! ## Example
//!
//! ```rust
//! use governor::RateLimiter;
//! use gemini_api_client::rate_limit::private_quota;
//!
//! let limiter = RateLimiter::direct(private_quota());
//! assert!(limiter.check().is_ok());
//! ```

use std::num::NonZeroU32;

use governor::Quota;

/// Public endpoints: requests per minute.
pub const PUBLIC_PER_MINUTE: u32 = 120;
/// Public endpoints: requests per second.
pub const PUBLIC_PER_SECOND: u32 = 1;
/// Private endpoints: requests per minute.
pub const PRIVATE_PER_MINUTE: u32 = 600;
/// Private endpoints: requests per second.
pub const PRIVATE_PER_SECOND: u32 = 5;
/// HTTP status the venue uses for "too many requests".
pub const RATE_LIMIT_STATUS: u16 = 429;

fn per_second(limit: u32) -> Quota {
    Quota::per_second(NonZeroU32::new(limit).unwrap_or(NonZeroU32::MIN))
}

/// Quota matching the public endpoint limit.
pub fn public_quota() -> Quota {
    per_second(PUBLIC_PER_SECOND)
}

/// Quota matching the private endpoint limit.
pub fn private_quota() -> Quota {
    per_second(PRIVATE_PER_SECOND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use governor::RateLimiter;

    #[test]
    fn test_per_second_limits_fit_per_minute_limits() {
        assert!(PUBLIC_PER_SECOND * 60 <= PUBLIC_PER_MINUTE);
        assert!(PRIVATE_PER_SECOND * 60 <= PRIVATE_PER_MINUTE);
    }

    #[test]
    fn test_private_quota_allows_burst_of_five() {
        let limiter = RateLimiter::direct(private_quota());
        for _ in 0..PRIVATE_PER_SECOND {
            assert!(limiter.check().is_ok());
        }
        assert!(limiter.check().is_err());
    }

    #[test]
    fn test_public_quota_allows_one() {
        let limiter = RateLimiter::direct(public_quota());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }
}
