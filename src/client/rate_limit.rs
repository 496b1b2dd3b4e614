//! Request pacing for the PickMe API
//!
//! One gate per client spaces consecutive requests by a minimum interval,
//! whatever endpoint they target. Concurrent callers each reserve their own
//! slot, so two tasks never pass the gate inside the same interval.

use std::num::NonZeroU32;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;

/// Minimum-interval gate shared by every request of a client.
pub struct PacingGate {
    limiter: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    min_interval: Duration,
}

impl PacingGate {
    /// Create a gate admitting one request per `min_interval`.
    ///
    /// A zero interval disables pacing.
    pub fn new(min_interval: Duration) -> Self {
        // A single cell with no burst: every admission pushes the next one
        // back by a full interval.
        let limiter = Quota::with_period(min_interval)
            .map(|quota| RateLimiter::direct(quota.allow_burst(NonZeroU32::MIN)));

        Self {
            limiter,
            min_interval,
        }
    }

    /// Gate that never waits.
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Whether requests are paced at all.
    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }

    /// Wait until this caller may issue its request.
    pub async fn wait(&self) {
        let Some(limiter) = &self.limiter else {
            return;
        };

        if limiter.check().is_ok() {
            return;
        }

        debug!("Pacing request, minimum interval {:?}", self.min_interval);
        limiter.until_ready().await;
    }
}
