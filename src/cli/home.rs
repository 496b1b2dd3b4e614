//! Home dashboard: profile, friends and images loaded concurrently
//!
//! The three requests are settled independently, so one failing section
//! does not hide the others.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, PaginationArgs};
use crate::client::models::{Friend, FriendStatus, Image, Profile};
use crate::client::{ApiResponse, PageParams, PickMeApi};
use crate::error::{ApiError, ErrorKind, Result};
use crate::models::{FriendDisplay, ImageDisplay, profile_rows};
use crate::output::json::format_json;
use crate::output::table::{format_details, format_table};

/// Outcome of each dashboard section
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub profile: ApiResponse<Profile>,
    pub friends: ApiResponse<Vec<Friend>>,
    pub images: ApiResponse<Vec<Image>>,
}

impl Dashboard {
    fn errors(&self) -> [Option<ErrorKind>; 3] {
        [self.profile.error, self.friends.error, self.images.error]
    }

    /// Whether any section was rejected for an invalid session
    pub fn session_rejected(&self) -> bool {
        self.errors().contains(&Some(ErrorKind::Unauthorized))
    }

    pub fn failed_sections(&self) -> usize {
        [
            self.profile.is_success(),
            self.friends.is_success(),
            self.images.is_success(),
        ]
        .iter()
        .filter(|ok| !**ok)
        .count()
    }
}

/// Load all dashboard sections at once
pub async fn load_dashboard<C: PickMeApi + ?Sized>(client: &C, page: &PageParams) -> Dashboard {
    let (profile, friends, images) = futures::join!(
        client.get_profile(),
        client.get_friends(FriendStatus::Accepted, page),
        client.get_user_images(page, false),
    );

    Dashboard {
        profile,
        friends,
        images,
    }
}

/// Run the home command
pub async fn run(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Loading your feed...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let dashboard = load_dashboard(ctx.client.as_ref(), &ctx.page_params(pagination)).await;
    spinner.finish_and_clear();

    if dashboard.session_rejected() {
        ctx.invalidate_session()?;
        return Err(ApiError::Unauthorized(
            "Session expired. Run `pickme login` again.".to_string(),
        )
        .into());
    }

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&dashboard)?),
        OutputFormat::Table => print_sections(dashboard),
    }
    Ok(())
}

fn print_sections(dashboard: Dashboard) {
    let failed = dashboard.failed_sections();

    println!("{}", "Profile".bold());
    section(dashboard.profile, |profile| format_details(&profile_rows(&profile)));

    println!("\n{}", "Friends".bold());
    section(dashboard.friends, |friends| {
        let rows: Vec<FriendDisplay> = friends.into_iter().map(FriendDisplay::from).collect();
        format_table(&rows)
    });

    println!("\n{}", "Images".bold());
    section(dashboard.images, |images| {
        let rows: Vec<ImageDisplay> = images.into_iter().map(ImageDisplay::from).collect();
        format_table(&rows)
    });

    if failed > 0 {
        println!("\n{} {} of 3 sections could not be loaded", "⚠".yellow(), failed);
    }
}

fn section<T>(response: ApiResponse<T>, render: impl FnOnce(T) -> String) {
    match response.into_result() {
        Ok(data) => println!("{}", render(data)),
        Err(err) => println!("{} {}", "✗".red(), err),
    }
}
