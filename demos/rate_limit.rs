//! Example: Throttling requests with the advisory quotas.
//!
//! Run with: cargo run --example rate_limit

use governor::RateLimiter;
use gemini_api_client::rate_limit::{
    PRIVATE_PER_MINUTE, PRIVATE_PER_SECOND, PUBLIC_PER_MINUTE, private_quota, public_quota,
};

fn main() {
    println!("Public: {PUBLIC_PER_MINUTE}/min, private: {PRIVATE_PER_MINUTE}/min");

    let private = RateLimiter::direct(private_quota());
    let allowed = (0..PRIVATE_PER_SECOND + 2)
        .filter(|_| private.check().is_ok())
        .count();
    println!("Private burst allowed: {allowed}");

    let public = RateLimiter::direct(public_quota());
    println!("Public first call: {:?}", public.check().is_ok());
    println!("Public second call: {:?}", public.check().is_ok());
}
