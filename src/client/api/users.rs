//! Users API trait

use async_trait::async_trait;

use crate::client::models::{SearchUser, UserStats};
use crate::client::{ApiResponse, PageParams};

/// User discovery operations for the PickMe API
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Search users by alias
    async fn search_users(&self, query: &str, page: &PageParams) -> ApiResponse<Vec<SearchUser>>;

    /// Activity counters for a user
    async fn get_user_stats(&self, user_id: &str) -> ApiResponse<UserStats>;
}
