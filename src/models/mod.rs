//! Display models for CLI output
//!
//! Converts API types into table rows and JSON records.

pub mod display;

pub use display::{
    FriendDisplay, FriendRequestDisplay, ImageDisplay, SearchUserDisplay, profile_rows,
    stats_rows,
};
