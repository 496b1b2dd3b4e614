//! User command handlers

use crate::cli::{CommandContext, GlobalOptions, PaginationArgs};
use crate::client::{ProfileApi, UsersApi};
use crate::error::{Error, Result};
use crate::models::{SearchUserDisplay, stats_rows};
use crate::output::{Details, Formattable};

pub async fn search(opts: &GlobalOptions, query: &str, pagination: &PaginationArgs) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::Other("search query is empty".to_string()));
    }

    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let page = ctx.page_params(pagination);
    let users = ctx.settle(ctx.client.search_users(query, &page).await)?;

    let display: Vec<SearchUserDisplay> = users.into_iter().map(SearchUserDisplay::from).collect();
    display.print(ctx.format)
}

/// Show the counters of `user_id`, or of the logged-in user
pub async fn stats(opts: &GlobalOptions, user_id: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let user_id = match user_id {
        Some(id) => id,
        None => ctx.settle(ctx.client.get_profile().await)?.id,
    };
    let stats = ctx.settle(ctx.client.get_user_stats(&user_id).await)?;

    Details::new(&stats, stats_rows(&stats)).print(ctx.format)
}
