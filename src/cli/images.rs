//! Image command handlers

use colored::Colorize;
use log::debug;

use crate::cli::{CommandContext, GlobalOptions, PaginationArgs};
use crate::client::ImagesApi;
use crate::client::models::{Image, NewImage};
use crate::error::{Error, Result};
use crate::models::ImageDisplay;
use crate::output::Formattable;

/// List own images, or those of `user`
pub async fn list(
    opts: &GlobalOptions,
    user: Option<&str>,
    pinned: bool,
    pagination: &PaginationArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let images = match user {
        Some(user_id) => {
            debug!("Listing images of {}", user_id);
            let images = ctx.settle(ctx.client.get_images_of(user_id).await)?;
            keep_pinned(images, pinned)
        }
        None => {
            let page = ctx.page_params(pagination);
            ctx.settle(ctx.client.get_user_images(&page, pinned).await)?
        }
    };

    let display: Vec<ImageDisplay> = images.into_iter().map(ImageDisplay::from).collect();
    display.print(ctx.format)
}

/// Post an image link
pub async fn add(opts: &GlobalOptions, link: &str, pin: bool) -> Result<()> {
    let link = link.trim();
    if !link.starts_with("http://") && !link.starts_with("https://") {
        return Err(Error::Other(format!("'{}' is not an http(s) link", link)));
    }

    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let image = NewImage {
        image_link: link.to_string(),
        is_pinned: pin,
    };
    let created = ctx.settle(ctx.client.add_image(&image).await)?;

    println!("{} Image {} added", "✓".green(), created.id.bold());
    Ok(())
}

fn keep_pinned(images: Vec<Image>, pinned_only: bool) -> Vec<Image> {
    if pinned_only {
        images.into_iter().filter(|image| image.is_pinned).collect()
    } else {
        images
    }
}
