//! PickMe API data models
//!
//! Wire names that differ from the Rust field names are mapped with serde
//! renames; nested wire shapes are flattened into the types exposed here.

mod auth;
mod friend;
mod image;
mod profile;
mod user;

#[cfg(test)]
pub use auth::{Account, ProfileSummary};
pub use auth::{LoginRequest, RegisterRequest, Session};
pub use friend::{Friend, FriendRequest, FriendResponse, FriendStatus, Friendship};
pub use image::{Image, NewImage};
pub use profile::{Profile, ProfilePayload, ProfileUpdate};
pub use user::{SearchUser, UserStats};
