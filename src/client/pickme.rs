//! PickMe API client implementation

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::{Value, json};

use super::api::{AuthApi, FriendsApi, ImagesApi, ProfileApi, UsersApi};
use super::classify::{PROFILE_RULES, REGISTRATION_RULES};
use super::envelope::{self, ApiResponse, Payload};
use super::models::{
    Friend, FriendRequest, FriendResponse, FriendStatus, Friendship, Image, LoginRequest,
    NewImage, Profile, ProfilePayload, ProfileUpdate, RegisterRequest, SearchUser, Session,
    UserStats,
};
use super::pagination::PageParams;
use super::rate_limit::PacingGate;
use super::request::ApiRequest;
use super::retry::RetryPolicy;
use super::ClientOptions;
use crate::error::{ApiError, ApiResult};
use crate::session::TokenStore;

/// PickMe API client.
///
/// All operations share one pacing gate and read the session token from the
/// token store right before sending.
pub struct PickMeClient {
    http: HttpClient,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    pacing: PacingGate,
    retry: RetryPolicy,
}

impl PickMeClient {
    /// Create a client with default pacing, retry and timeout settings
    #[cfg(test)]
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> ApiResult<Self> {
        Self::with_options(base_url, tokens, ClientOptions::default())
    }

    pub fn with_options(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
        options: ClientOptions,
    ) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(options.request_timeout)
            .user_agent(concat!("pickme/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        let pacing = PacingGate::new(options.min_request_interval);
        debug!(
            "Client for {}: pacing {}, {} retries from {:?}",
            base_url,
            if pacing.is_enabled() {
                format!("every {:?}", options.min_request_interval)
            } else {
                "off".to_string()
            },
            options.retry.max_retries(),
            options.retry.base_delay()
        );

        Ok(Self {
            http,
            base_url,
            tokens,
            pacing,
            retry: options.retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(&self, request: ApiRequest) -> ApiResult<Payload> {
        if request.retry_on_rate_limit {
            self.retry.run(|| self.send(&request)).await
        } else {
            self.send(&request).await
        }
    }

    /// One network attempt, paced
    async fn send(&self, request: &ApiRequest) -> ApiResult<Payload> {
        // Checked before pacing so a missing token costs no slot
        let token = if request.authorized {
            Some(self.tokens.get().ok_or(ApiError::MissingToken)?)
        } else {
            None
        };

        self.pacing.wait().await;

        let url = format!("{}{}", self.base_url, request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("{} {} failed: {}", request.method, request.path, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("Reading response of {} failed: {}", request.path, e);
            ApiError::from(e)
        })?;
        debug!("{} {} -> {}", request.method, request.path, status);

        envelope::normalize(status, &body, request)
    }

    async fn fetch_profile(&self, request: ApiRequest) -> ApiResponse<Profile> {
        self.execute(request)
            .await
            .and_then(Payload::decode::<ProfilePayload>)
            .map(Profile::from)
            .into()
    }
}

#[async_trait]
impl AuthApi for PickMeClient {
    async fn login(&self, email: &str, password: &str) -> ApiResponse<Session> {
        let result = async {
            let request = ApiRequest::post("/auth/login")
                .json(&LoginRequest { email, password })?
                .fallback("Login failed");

            let session: Session = self.execute(request).await?.decode()?;
            if session.token.is_none() {
                return Err(ApiError::InvalidResponse(
                    "login response carried no token".to_string(),
                ));
            }
            Ok(session)
        }
        .await;

        result.into()
    }

    async fn register(&self, email: &str, password: &str, alias: &str) -> ApiResponse<Session> {
        let result = async {
            let request = ApiRequest::post("/auth/register")
                .json(&RegisterRequest {
                    email,
                    password,
                    alias,
                })?
                .field_rules(REGISTRATION_RULES)
                .fallback("Registration failed");

            let payload = self.execute(request).await?;
            let message = payload.message.clone();
            let session: Session = payload.decode()?;
            Ok::<_, ApiError>((session, message))
        }
        .await;

        match result {
            Ok((session, message)) => ApiResponse::ok(session)
                .with_message(message.unwrap_or_else(|| "Registration successful".to_string())),
            Err(err) => ApiResponse::failure(&err),
        }
    }

    async fn verify_token(&self) -> bool {
        let request = ApiRequest::get("/auth/verify")
            .authorized()
            .fallback("Session is no longer valid");

        match self.execute(request).await {
            Ok(_) => true,
            Err(err) => {
                debug!("Token verification failed: {}", err);
                false
            }
        }
    }
}

#[async_trait]
impl ProfileApi for PickMeClient {
    async fn get_profile(&self) -> ApiResponse<Profile> {
        let request = ApiRequest::get("/profile/me")
            .authorized()
            .fallback("Failed to load profile");
        self.fetch_profile(request).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResponse<Profile> {
        let request = match ApiRequest::put("/profile/me").json(update) {
            Ok(request) => request
                .authorized()
                .field_rules(PROFILE_RULES)
                .fallback("Failed to update profile"),
            Err(err) => return ApiResponse::failure(&err),
        };
        self.fetch_profile(request).await
    }

    async fn get_user_profile(&self, user_id: &str) -> ApiResponse<Profile> {
        let request = ApiRequest::get(format!("/profile/{}", user_id))
            .authorized()
            .fallback("Failed to load profile");
        self.fetch_profile(request).await
    }
}

#[async_trait]
impl ImagesApi for PickMeClient {
    async fn get_user_images(
        &self,
        page: &PageParams,
        pinned_only: bool,
    ) -> ApiResponse<Vec<Image>> {
        let mut request = ApiRequest::get("/images/me")
            .page(page)
            .authorized()
            .fallback("Failed to load images");
        if pinned_only {
            request = request.query("pinned", true);
        }

        self.execute(request)
            .await
            .and_then(|payload| payload.list::<Image>("images"))
            .map(|images| {
                images
                    .into_iter()
                    .filter(|image| !pinned_only || image.is_pinned)
                    .collect()
            })
            .into()
    }

    async fn get_images_of(&self, user_id: &str) -> ApiResponse<Vec<Image>> {
        let request = ApiRequest::get(format!("/images/user/{}", user_id))
            .authorized()
            .fallback("Failed to load images");

        self.execute(request)
            .await
            .and_then(|payload| payload.list::<Image>("images"))
            .into()
    }

    async fn add_image(&self, image: &NewImage) -> ApiResponse<Image> {
        let result = async {
            let request = ApiRequest::post("/images")
                .json(image)?
                .authorized()
                .fallback("Failed to add image");
            self.execute(request).await?.decode::<Image>()
        }
        .await;

        result.into()
    }
}

#[async_trait]
impl FriendsApi for PickMeClient {
    async fn get_friends(
        &self,
        status: FriendStatus,
        page: &PageParams,
    ) -> ApiResponse<Vec<Friend>> {
        let request = ApiRequest::get("/friends")
            .query("status", status)
            .page(page)
            .authorized()
            .retry_on_rate_limit()
            .fallback("Failed to load friends");

        self.execute(request)
            .await
            .and_then(|payload| payload.list::<Friendship>("friends"))
            .map(|friendships| friendships.into_iter().map(Friend::from).collect())
            .into()
    }

    async fn get_friend_requests(&self) -> ApiResponse<Vec<FriendRequest>> {
        let request = ApiRequest::get("/friends/requests")
            .authorized()
            .retry_on_rate_limit()
            .fallback("Failed to load friend requests");

        self.execute(request)
            .await
            .and_then(|payload| payload.list::<FriendRequest>("requests"))
            .into()
    }

    async fn send_friend_request(&self, user_id: &str) -> ApiResponse<Value> {
        let result = async {
            let request = ApiRequest::post("/friends")
                .json(&json!({ "friend_id": user_id }))?
                .authorized()
                .retry_on_rate_limit()
                .fallback("Failed to send friend request");
            Ok::<_, ApiError>(self.execute(request).await?.data)
        }
        .await;

        result.into()
    }

    async fn respond_to_friend_request(
        &self,
        friend_id: &str,
        response: FriendResponse,
    ) -> ApiResponse<Value> {
        let result = async {
            let request = ApiRequest::put(format!("/friends/{}/respond", friend_id))
                .json(&json!({ "status": response }))?
                .authorized()
                .retry_on_rate_limit()
                .fallback("Failed to respond to friend request");
            Ok::<_, ApiError>(self.execute(request).await?.data)
        }
        .await;

        result.into()
    }

    async fn remove_friend(&self, friend_id: &str) -> ApiResponse<()> {
        let request = ApiRequest::delete(format!("/friends/{}", friend_id))
            .authorized()
            .retry_on_rate_limit()
            .fallback("Failed to remove friend");

        self.execute(request).await.map(|_| ()).into()
    }
}

#[async_trait]
impl UsersApi for PickMeClient {
    async fn search_users(&self, query: &str, page: &PageParams) -> ApiResponse<Vec<SearchUser>> {
        let request = ApiRequest::get("/users/search")
            .query("q", query)
            .page(page)
            .authorized()
            .retry_on_rate_limit()
            .fallback("Search failed");

        self.execute(request)
            .await
            .and_then(|payload| payload.list::<SearchUser>("users"))
            .into()
    }

    async fn get_user_stats(&self, user_id: &str) -> ApiResponse<UserStats> {
        let request = ApiRequest::get(format!("/users/{}/stats", user_id))
            .authorized()
            .fallback("Failed to load statistics");

        self.execute(request)
            .await
            .and_then(Payload::decode::<UserStats>)
            .into()
    }
}
