//! Friend command handlers

use colored::Colorize;

use crate::cli::{AnswerArg, CommandContext, FriendStatusArg, GlobalOptions, PaginationArgs};
use crate::client::FriendsApi;
use crate::client::models::{FriendResponse, FriendStatus};
use crate::error::Result;
use crate::models::{FriendDisplay, FriendRequestDisplay};
use crate::output::Formattable;

pub async fn list(
    opts: &GlobalOptions,
    status: FriendStatusArg,
    pagination: &PaginationArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let page = ctx.page_params(pagination);
    let friends = ctx.settle(
        ctx.client
            .get_friends(FriendStatus::from(status), &page)
            .await,
    )?;

    let display: Vec<FriendDisplay> = friends.into_iter().map(FriendDisplay::from).collect();
    display.print(ctx.format)
}

pub async fn requests(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let requests = ctx.settle(ctx.client.get_friend_requests().await)?;

    let display: Vec<FriendRequestDisplay> = requests
        .into_iter()
        .map(FriendRequestDisplay::from)
        .collect();
    display.print(ctx.format)
}

pub async fn add(opts: &GlobalOptions, user_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let response = ctx.client.send_friend_request(user_id).await;
    let message = response.message.clone();
    ctx.settle(response)?;

    println!(
        "{} {}",
        "✓".green(),
        message.unwrap_or_else(|| format!("Friend request sent to {}", user_id))
    );
    Ok(())
}

pub async fn respond(opts: &GlobalOptions, user_id: &str, answer: AnswerArg) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let answer = FriendResponse::from(answer);
    ctx.settle(ctx.client.respond_to_friend_request(user_id, answer).await)?;

    let verb = match answer {
        FriendResponse::Accept => "accepted",
        FriendResponse::Decline => "declined",
    };
    println!("{} Request from {} {}", "✓".green(), user_id.bold(), verb);
    Ok(())
}

pub async fn remove(opts: &GlobalOptions, user_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    ctx.settle(ctx.client.remove_friend(user_id).await)?;

    println!("{} Removed {} from your friends", "✓".green(), user_id.bold());
    Ok(())
}
