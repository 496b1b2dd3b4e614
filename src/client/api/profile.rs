//! Profile API trait

use async_trait::async_trait;

use crate::client::ApiResponse;
use crate::client::models::{Profile, ProfileUpdate};

/// Profile operations for the PickMe API
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Profile of the logged-in user
    async fn get_profile(&self) -> ApiResponse<Profile>;

    /// Update the logged-in user's profile
    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResponse<Profile>;

    /// Profile of another user
    async fn get_user_profile(&self, user_id: &str) -> ApiResponse<Profile>;
}
