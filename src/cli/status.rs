//! Status command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::AuthApi;
use crate::error::Result;

/// Run the status command to display configuration and session status
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "PickMe Status".bold());

    let ctx = CommandContext::new(opts)?;

    let path = ctx.config_path.display().to_string();
    if ctx.config_path.exists() {
        println!("Config file: {}", path.cyan());
    } else {
        println!("Config file: {} {}", path.cyan(), "(not created yet)".dimmed());
    }
    println!("API: {}", ctx.client.base_url());
    println!("Output format: {:?}", ctx.format);
    println!();

    if !ctx.has_session() {
        println!("{} Not logged in", "✗".red());
        println!("  → Run 'pickme login' to start a session");
        return Ok(());
    }

    // A false answer also covers network failures, so the token is kept
    if ctx.client.verify_token().await {
        println!("{} Session valid", "✓".green());
    } else {
        println!("{} Session could not be verified", "⚠".yellow());
        println!("  → Run 'pickme login' if commands keep failing");
    }

    Ok(())
}
