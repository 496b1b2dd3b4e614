//! Image models

use serde::{Deserialize, Serialize};

/// Image posted by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,

    pub image_link: String,

    #[serde(default)]
    pub is_pinned: bool,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub user_id: String,
}

/// Body of `POST /images`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewImage {
    pub image_link: String,
    pub is_pinned: bool,
}
