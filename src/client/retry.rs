//! Retry policy for rate-limited requests
//!
//! Only rate-limited failures are retried. The delay before retry `n` is
//! `base_delay * 2^(n-1)`, so with the defaults a request is attempted at
//! most four times and waits 1s, 2s and 4s in between.

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};

use crate::error::ApiResult;

/// Exponential backoff policy applied to opted-in operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

impl RetryPolicy {
    pub const fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Delay before retry number `retry` (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.base_delay.saturating_mul(factor)
    }

    /// Run `operation`, re-issuing it while it fails with a rate limit.
    ///
    /// Any other failure, or the last rate-limited failure once retries are
    /// exhausted, is returned unchanged.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> ApiResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let mut retries = 0;

        loop {
            match operation().await {
                Err(err) if err.is_rate_limited() && retries < self.max_retries => {
                    retries += 1;
                    let delay = self.delay_for(retries);
                    warn!(
                        "Rate limited, retry {}/{} in {:?}",
                        retries, self.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    if err.is_rate_limited() {
                        warn!("Still rate limited after {} retries, giving up", retries);
                    }
                    return Err(err);
                }
                Ok(value) => {
                    if retries > 0 {
                        debug!("Request succeeded after {} retries", retries);
                    }
                    return Ok(value);
                }
            }
        }
    }
}
