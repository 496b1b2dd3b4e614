//! Friends API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::client::models::{Friend, FriendRequest, FriendResponse, FriendStatus};
use crate::client::{ApiResponse, PageParams};

/// Friend operations for the PickMe API.
///
/// All of these are retried on rate limiting.
#[async_trait]
pub trait FriendsApi: Send + Sync {
    /// Friends in the given state
    async fn get_friends(&self, status: FriendStatus, page: &PageParams)
    -> ApiResponse<Vec<Friend>>;

    /// Incoming and outgoing pending requests
    async fn get_friend_requests(&self) -> ApiResponse<Vec<FriendRequest>>;

    /// Ask `user_id` to become a friend
    async fn send_friend_request(&self, user_id: &str) -> ApiResponse<Value>;

    /// Accept or decline the pending request from `friend_id`
    async fn respond_to_friend_request(
        &self,
        friend_id: &str,
        response: FriendResponse,
    ) -> ApiResponse<Value>;

    /// End the friendship with `friend_id`
    async fn remove_friend(&self, friend_id: &str) -> ApiResponse<()>;
}
