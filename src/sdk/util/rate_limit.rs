use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// ORS free tier allows 40 directions requests per minute; the segment
/// fan-out shares one limiter so concurrent requests stay inside the quota.
pub fn directions_limiter() -> Limiter {
    let quota = Quota::per_minute(NonZeroU32::new(40).unwrap());
    Arc::new(RateLimiter::direct(quota))
}

pub fn chat_limiter() -> Limiter {
    let quota = Quota::per_minute(NonZeroU32::new(20).unwrap());
    Arc::new(RateLimiter::direct(quota))
}
