//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::PageParams;

/// Shared pagination arguments for list commands.
///
/// Flatten this into any command that supports pagination:
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Results per page (defaults to the configured page size)
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// Page number (1-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<u32>,
}

impl PaginationArgs {
    /// Convert to API parameters, using `default_limit` when no limit was given
    pub fn to_page_params(&self, default_limit: u32) -> PageParams {
        let params = PageParams::new().limit(self.limit.unwrap_or(default_limit));
        match self.page {
            Some(page) => params.page(page),
            None => params,
        }
    }
}
