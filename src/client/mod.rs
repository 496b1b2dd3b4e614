//! PickMe API client
//!
//! The HTTP session layer: token header injection, request pacing, retry with
//! exponential backoff on rate limiting, and normalization of every outcome
//! into an [`ApiResponse`].

use std::time::Duration;

pub mod api;
pub mod classify;
pub mod envelope;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod pickme;
pub mod rate_limit;
pub mod request;
pub mod retry;

pub use api::{AuthApi, FriendsApi, ImagesApi, ProfileApi, UsersApi};
pub use envelope::ApiResponse;
#[cfg(test)]
pub use mock::MockPickMeClient;
pub use pagination::PageParams;
pub use pickme::PickMeClient;
pub use retry::RetryPolicy;

/// Complete PickMe API surface.
///
/// Implemented for every type providing all the resource traits, so command
/// handlers can be generic over the real client and the test mock.
pub trait PickMeApi: AuthApi + ProfileApi + ImagesApi + FriendsApi + UsersApi {}

impl<T> PickMeApi for T where T: AuthApi + ProfileApi + ImagesApi + FriendsApi + UsersApi {}

/// Pacing, retry and timeout settings of a client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Minimum gap between two sends; zero disables pacing
    pub min_request_interval: Duration,
    pub retry: RetryPolicy,
    /// Deadline of a single network attempt
    pub request_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            min_request_interval: Duration::from_millis(100),
            retry: RetryPolicy::default(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ClientOptions::default();
        assert_eq!(options.min_request_interval, Duration::from_millis(100));
        assert_eq!(options.retry, RetryPolicy::new(3, Duration::from_secs(1)));
        assert_eq!(options.request_timeout, Duration::from_secs(10));
    }
}
