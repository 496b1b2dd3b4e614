//! Mock PickMe API client for testing
//!
//! Implements every API trait over in-memory data, without network calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use super::api::{AuthApi, FriendsApi, ImagesApi, ProfileApi, UsersApi};
use super::envelope::ApiResponse;
use super::fixtures::ProfileBuilder;
use super::models::{
    Account, Friend, FriendRequest, FriendResponse, FriendStatus, Image, NewImage, Profile,
    ProfileUpdate, SearchUser, Session, UserStats,
};
use super::pagination::PageParams;
use crate::error::ErrorKind;

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockPickMeClient::new()
///     .with_friends(vec![FriendBuilder::new("u2").build()])
///     .await
///     .failing("get_user_images", ErrorKind::Server, "Server error")
///     .await;
/// ```
#[derive(Default)]
pub struct MockPickMeClient {
    profile: Arc<Mutex<Option<Profile>>>,
    images: Arc<Mutex<Vec<Image>>>,
    friends: Arc<Mutex<Vec<Friend>>>,
    requests: Arc<Mutex<Vec<FriendRequest>>>,
    users: Arc<Mutex<Vec<SearchUser>>>,
    token_valid: Arc<Mutex<bool>>,
    /// Operation name -> failure returned instead of data
    failures: Arc<Mutex<HashMap<&'static str, (ErrorKind, String)>>>,
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts per operation
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    calls: HashMap<&'static str, usize>,
}

impl CallCounts {
    pub fn get(&self, operation: &str) -> usize {
        self.calls.get(operation).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.calls.values().sum()
    }
}

impl MockPickMeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_profile(self, profile: Profile) -> Self {
        *self.profile.lock().await = Some(profile);
        self
    }

    pub async fn with_images(self, images: Vec<Image>) -> Self {
        *self.images.lock().await = images;
        self
    }

    pub async fn with_friends(self, friends: Vec<Friend>) -> Self {
        *self.friends.lock().await = friends;
        self
    }

    pub async fn with_requests(self, requests: Vec<FriendRequest>) -> Self {
        *self.requests.lock().await = requests;
        self
    }

    pub async fn with_users(self, users: Vec<SearchUser>) -> Self {
        *self.users.lock().await = users;
        self
    }

    pub async fn with_valid_token(self) -> Self {
        *self.token_valid.lock().await = true;
        self
    }

    /// Make `operation` fail with the given kind and message
    pub async fn failing(
        self,
        operation: &'static str,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> Self {
        self.failures
            .lock()
            .await
            .insert(operation, (kind, message.into()));
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    async fn record(&self, operation: &'static str) -> Option<(ErrorKind, String)> {
        *self
            .call_count
            .lock()
            .await
            .calls
            .entry(operation)
            .or_default() += 1;
        self.failures.lock().await.get(operation).cloned()
    }

    async fn respond<T>(&self, operation: &'static str, data: T) -> ApiResponse<T> {
        match self.record(operation).await {
            Some((kind, message)) => ApiResponse {
                success: false,
                data: None,
                message: Some(message),
                error: Some(kind),
            },
            None => ApiResponse::ok(data),
        }
    }

    async fn current_profile(&self) -> Profile {
        self.profile
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| ProfileBuilder::new("me").build())
    }

    fn session(email: &str) -> Session {
        Session {
            token: Some("mock-token".to_string()),
            user: Some(Account {
                id: "me".to_string(),
                email: email.to_string(),
                created_at: None,
            }),
            profile: None,
        }
    }
}

#[async_trait]
impl AuthApi for MockPickMeClient {
    async fn login(&self, email: &str, _password: &str) -> ApiResponse<Session> {
        self.respond("login", Self::session(email)).await
    }

    async fn register(&self, email: &str, _password: &str, _alias: &str) -> ApiResponse<Session> {
        self.respond("register", Self::session(email))
            .await
            .with_message("Registration successful")
    }

    async fn verify_token(&self) -> bool {
        self.record("verify_token").await.is_none() && *self.token_valid.lock().await
    }
}

#[async_trait]
impl ProfileApi for MockPickMeClient {
    async fn get_profile(&self) -> ApiResponse<Profile> {
        let profile = self.current_profile().await;
        self.respond("get_profile", profile).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResponse<Profile> {
        let mut profile = self.current_profile().await;
        if let Some(alias) = &update.alias {
            profile.alias = alias.clone();
        }
        if update.country.is_some() {
            profile.country = update.country.clone();
        }
        if update.language.is_some() {
            profile.language = update.language.clone();
        }
        if update.description.is_some() {
            profile.description = update.description.clone();
        }
        if let Some(is_public) = update.is_public {
            profile.is_public = is_public;
        }

        let response = self.respond("update_profile", profile.clone()).await;
        if response.success {
            *self.profile.lock().await = Some(profile);
        }
        response
    }

    async fn get_user_profile(&self, user_id: &str) -> ApiResponse<Profile> {
        let profile = ProfileBuilder::new(user_id).build();
        self.respond("get_user_profile", profile).await
    }
}

#[async_trait]
impl ImagesApi for MockPickMeClient {
    async fn get_user_images(
        &self,
        page: &PageParams,
        pinned_only: bool,
    ) -> ApiResponse<Vec<Image>> {
        let images: Vec<Image> = self
            .images
            .lock()
            .await
            .iter()
            .filter(|image| !pinned_only || image.is_pinned)
            .skip((page.page.saturating_sub(1) * page.limit) as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();
        self.respond("get_user_images", images).await
    }

    async fn get_images_of(&self, user_id: &str) -> ApiResponse<Vec<Image>> {
        let images: Vec<Image> = self
            .images
            .lock()
            .await
            .iter()
            .filter(|image| image.user_id == user_id)
            .cloned()
            .collect();
        self.respond("get_images_of", images).await
    }

    async fn add_image(&self, image: &NewImage) -> ApiResponse<Image> {
        let mut images = self.images.lock().await;
        let created = Image {
            id: format!("img-{}", images.len() + 1),
            image_link: image.image_link.clone(),
            is_pinned: image.is_pinned,
            created_at: "2025-06-01T00:00:00Z".to_string(),
            user_id: "me".to_string(),
        };

        let response = self.respond("add_image", created.clone()).await;
        if response.success {
            images.push(created);
        }
        response
    }
}

#[async_trait]
impl FriendsApi for MockPickMeClient {
    async fn get_friends(
        &self,
        status: FriendStatus,
        _page: &PageParams,
    ) -> ApiResponse<Vec<Friend>> {
        let friends: Vec<Friend> = self
            .friends
            .lock()
            .await
            .iter()
            .filter(|friend| friend.status == status)
            .cloned()
            .collect();
        self.respond("get_friends", friends).await
    }

    async fn get_friend_requests(&self) -> ApiResponse<Vec<FriendRequest>> {
        let requests = self.requests.lock().await.clone();
        self.respond("get_friend_requests", requests).await
    }

    async fn send_friend_request(&self, user_id: &str) -> ApiResponse<Value> {
        self.respond("send_friend_request", json!({ "friend_id": user_id }))
            .await
    }

    async fn respond_to_friend_request(
        &self,
        friend_id: &str,
        response: FriendResponse,
    ) -> ApiResponse<Value> {
        let outcome = self
            .respond("respond_to_friend_request", Value::Null)
            .await;
        if outcome.success {
            let mut requests = self.requests.lock().await;
            requests.retain(|request| request.requester.id != friend_id);
            if response == FriendResponse::Accept {
                let mut friends = self.friends.lock().await;
                if let Some(friend) = friends.iter_mut().find(|f| f.id == friend_id) {
                    friend.status = FriendStatus::Accepted;
                }
            }
        }
        outcome
    }

    async fn remove_friend(&self, friend_id: &str) -> ApiResponse<()> {
        let outcome = self.respond("remove_friend", ()).await;
        if outcome.success {
            self.friends
                .lock()
                .await
                .retain(|friend| friend.id != friend_id);
        }
        outcome
    }
}

#[async_trait]
impl UsersApi for MockPickMeClient {
    async fn search_users(&self, query: &str, _page: &PageParams) -> ApiResponse<Vec<SearchUser>> {
        let query = query.to_lowercase();
        let users: Vec<SearchUser> = self
            .users
            .lock()
            .await
            .iter()
            .filter(|user| user.alias.to_lowercase().contains(&query))
            .cloned()
            .collect();
        self.respond("search_users", users).await
    }

    async fn get_user_stats(&self, user_id: &str) -> ApiResponse<UserStats> {
        let friends_count = self
            .friends
            .lock()
            .await
            .iter()
            .filter(|friend| friend.status == FriendStatus::Accepted)
            .count() as u64;
        let images_count = self
            .images
            .lock()
            .await
            .iter()
            .filter(|image| image.user_id == user_id)
            .count() as u64;

        let stats = UserStats {
            id: user_id.to_string(),
            friends_count,
            images_count,
            posts_count: None,
            events_count: None,
        };
        self.respond("get_user_stats", stats).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{FriendBuilder, ImageBuilder, SearchUserBuilder};

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockPickMeClient::new();

        let friends = mock
            .get_friends(FriendStatus::Accepted, &PageParams::default())
            .await;
        assert!(friends.success);
        assert!(friends.data.unwrap().is_empty());

        assert!(!mock.verify_token().await);
    }

    #[tokio::test]
    async fn test_mock_client_filters_friends_by_status() {
        let mock = MockPickMeClient::new()
            .with_friends(vec![
                FriendBuilder::new("u1").build(),
                FriendBuilder::new("u2")
                    .status(FriendStatus::Pending)
                    .build(),
            ])
            .await;

        let pending = mock
            .get_friends(FriendStatus::Pending, &PageParams::default())
            .await
            .data
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "u2");
    }

    #[tokio::test]
    async fn test_mock_client_failure() {
        let mock = MockPickMeClient::new()
            .failing("search_users", ErrorKind::RateLimited, "Too many requests")
            .await;

        let response = mock.search_users("a", &PageParams::default()).await;
        assert!(!response.success);
        assert_eq!(response.error, Some(ErrorKind::RateLimited));
        assert_eq!(response.message.as_deref(), Some("Too many requests"));
    }

    #[tokio::test]
    async fn test_mock_client_tracks_calls() {
        let mock = MockPickMeClient::new()
            .with_users(vec![SearchUserBuilder::new("u1", "Marie").build()])
            .await;

        let found = mock.search_users("mar", &PageParams::default()).await;
        assert_eq!(found.data.unwrap().len(), 1);
        mock.get_profile().await;

        let counts = mock.call_counts().await;
        assert_eq!(counts.get("search_users"), 1);
        assert_eq!(counts.get("get_profile"), 1);
        assert_eq!(counts.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_client_pinned_images() {
        let mock = MockPickMeClient::new()
            .with_images(vec![
                ImageBuilder::new("i1").pinned().build(),
                ImageBuilder::new("i2").build(),
            ])
            .await;

        let pinned = mock
            .get_user_images(&PageParams::default(), true)
            .await
            .data
            .unwrap();
        assert_eq!(pinned.len(), 1);

        let added = mock
            .add_image(&NewImage {
                image_link: "https://img.example.com/new.jpg".to_string(),
                is_pinned: false,
            })
            .await;
        assert_eq!(added.data.unwrap().id, "img-3");
    }
}
