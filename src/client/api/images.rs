//! Images API trait

use async_trait::async_trait;

use crate::client::models::{Image, NewImage};
use crate::client::{ApiResponse, PageParams};

/// Image operations for the PickMe API
#[async_trait]
pub trait ImagesApi: Send + Sync {
    /// Images of the logged-in user, optionally only pinned ones
    async fn get_user_images(&self, page: &PageParams, pinned_only: bool)
    -> ApiResponse<Vec<Image>>;

    /// Images of another user
    async fn get_images_of(&self, user_id: &str) -> ApiResponse<Vec<Image>>;

    /// Add an image to the logged-in user's gallery
    async fn add_image(&self, image: &NewImage) -> ApiResponse<Image>;
}
