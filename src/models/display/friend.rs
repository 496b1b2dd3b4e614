//! Friend and friend request display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_timestamp, or_dash};
use crate::client::models::{Friend, FriendRequest};

/// Friend display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FriendDisplay {
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "ALIAS")]
    pub alias: String,

    #[tabled(rename = "COUNTRY")]
    pub country: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    /// Who sent the request: "me" or "them"
    #[tabled(rename = "ASKED BY")]
    pub asked_by: String,

    #[tabled(rename = "SINCE")]
    pub since: String,
}

impl From<Friend> for FriendDisplay {
    fn from(friend: Friend) -> Self {
        Self {
            country: or_dash(friend.country.as_deref()),
            status: friend.status.to_string(),
            asked_by: if friend.requested_by_me { "me" } else { "them" }.to_string(),
            since: format_timestamp(&friend.created_at),
            id: friend.id,
            alias: friend.alias,
        }
    }
}

/// Incoming friend request display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FriendRequestDisplay {
    #[tabled(rename = "REQUEST ID")]
    pub id: String,

    #[tabled(rename = "FROM ID")]
    pub from_id: String,

    #[tabled(rename = "FROM")]
    pub from: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "SENT")]
    pub sent: String,
}

impl From<FriendRequest> for FriendRequestDisplay {
    fn from(request: FriendRequest) -> Self {
        Self {
            id: request.id,
            from_id: request.requester.id,
            from: request.requester.alias,
            status: request.status.to_string(),
            sent: format_timestamp(&request.created_at),
        }
    }
}
