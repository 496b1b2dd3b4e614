//! Authentication API trait

use async_trait::async_trait;

use crate::client::ApiResponse;
use crate::client::models::Session;

/// Authentication operations for the PickMe API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a session token
    async fn login(&self, email: &str, password: &str) -> ApiResponse<Session>;

    /// Create an account
    async fn register(&self, email: &str, password: &str, alias: &str) -> ApiResponse<Session>;

    /// Whether the stored token is still accepted.
    ///
    /// Without a stored token this is `false` and nothing is sent.
    async fn verify_token(&self) -> bool;
}
