//! User search and statistics models

use serde::{Deserialize, Serialize};

/// User returned by search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchUser {
    pub id: String,

    pub alias: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default)]
    pub is_public: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, rename = "pays", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, rename = "langue", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Activity counters for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub id: String,

    #[serde(default)]
    pub friends_count: u64,

    #[serde(default)]
    pub images_count: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_count: Option<u64>,
}
