//! Shared CLI argument types

mod common;
mod global;
mod pagination;

pub use common::{AnswerArg, FriendStatusArg, OutputFormat};
pub use global::GlobalOptions;
pub use pagination::PaginationArgs;
