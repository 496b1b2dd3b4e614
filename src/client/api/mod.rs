//! API trait definitions split by resource
//!
//! - [`AuthApi`] - Login, registration and token checks
//! - [`ProfileApi`] - Own and other users' profiles
//! - [`ImagesApi`] - Image listing and upload
//! - [`FriendsApi`] - Friend lists and requests
//! - [`UsersApi`] - User search and statistics
//!
//! The [`PickMeApi`](super::PickMeApi) super-trait combines them. Every
//! operation except `verify_token` resolves to an
//! [`ApiResponse`](super::ApiResponse).

mod auth;
mod friends;
mod images;
mod profile;
mod users;

pub use auth::AuthApi;
pub use friends::FriendsApi;
pub use images::ImagesApi;
pub use profile::ProfileApi;
pub use users::UsersApi;
