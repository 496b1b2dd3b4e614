//! Common CLI types shared across commands

use crate::client::models::{FriendResponse, FriendStatus};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - human-readable rows (default)
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file, ignoring case
    pub fn parse(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name.trim(), true).ok()
    }
}

/// Friendship state filter for `friends list`
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum FriendStatusArg {
    Pending,
    #[default]
    Accepted,
    Declined,
}

impl From<FriendStatusArg> for FriendStatus {
    fn from(arg: FriendStatusArg) -> Self {
        match arg {
            FriendStatusArg::Pending => FriendStatus::Pending,
            FriendStatusArg::Accepted => FriendStatus::Accepted,
            FriendStatusArg::Declined => FriendStatus::Declined,
        }
    }
}

/// Answer to a friend request
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum AnswerArg {
    Accept,
    Decline,
}

impl From<AnswerArg> for FriendResponse {
    fn from(arg: AnswerArg) -> Self {
        match arg {
            AnswerArg::Accept => FriendResponse::Accept,
            AnswerArg::Decline => FriendResponse::Decline,
        }
    }
}
