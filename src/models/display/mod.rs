//! Display model implementations for table and JSON output

mod common;
mod friend;
mod image;
mod profile;
mod user;

pub use friend::{FriendDisplay, FriendRequestDisplay};
pub use image::ImageDisplay;
pub use profile::profile_rows;
pub use user::{SearchUserDisplay, stats_rows};
