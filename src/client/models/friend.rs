//! Friendship models

use std::fmt;

use serde::{Deserialize, Serialize};

/// State of a friendship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendStatus {
    Pending,
    #[default]
    Accepted,
    Declined,
    /// Any state this client does not know yet
    #[serde(other)]
    Unknown,
}

impl FriendStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendStatus::Pending => "pending",
            FriendStatus::Accepted => "accepted",
            FriendStatus::Declined => "declined",
            FriendStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FriendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer to a pending friend request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FriendResponse {
    #[serde(rename = "accepted")]
    Accept,
    #[serde(rename = "declined")]
    Decline,
}

/// Friendship as returned by `GET /friends`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Friendship {
    pub friendship_id: String,
    pub friend_user_id: String,
    pub profile: FriendProfile,
    pub status: FriendStatus,
    #[serde(default)]
    pub requested_by_me: bool,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FriendProfile {
    #[serde(default)]
    pub id: String,
    pub alias: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub pays: Option<String>,
}

/// Friend, flattened from [`Friendship`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    /// The friend's user ID
    pub id: String,

    pub friendship_id: String,

    pub alias: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    pub status: FriendStatus,

    #[serde(default)]
    pub requested_by_me: bool,

    #[serde(default)]
    pub created_at: String,
}

impl From<Friendship> for Friend {
    fn from(friendship: Friendship) -> Self {
        Friend {
            id: friendship.friend_user_id,
            friendship_id: friendship.friendship_id,
            alias: friendship.profile.alias,
            avatar: friendship.profile.avatar,
            country: friendship.profile.pays,
            status: friendship.status,
            requested_by_me: friendship.requested_by_me,
            created_at: friendship.created_at,
        }
    }
}

/// Minimal user reference inside a friend request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Pending request between two users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendRequest {
    pub id: String,
    pub requester: UserRef,
    pub requested: UserRef,
    pub status: FriendStatus,
    #[serde(default)]
    pub created_at: String,
}
