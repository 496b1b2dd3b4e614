//! Login, registration and logout

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::AuthApi;
use crate::client::models::Session;
use crate::error::{ApiError, ConfigError, Result};
use crate::session::TokenStore;

/// Environment variable read instead of prompting for a password
pub const PASSWORD_ENV: &str = "PICKME_PASSWORD";

/// Run the login command
pub async fn login(opts: &GlobalOptions, email: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let email = prompt_if_missing(email, "Email")?;
    let password = read_password(false)?;

    println!("{}", "Logging in...".cyan());
    // Failed credentials must not cost an existing session
    let session = ctx.client.login(&email, &password).await.into_result()?;
    let token = session
        .token
        .clone()
        .ok_or_else(|| ApiError::InvalidResponse("login returned no token".to_string()))?;
    ctx.tokens.save(&token)?;
    debug!("Token saved to {}", ctx.config_path.display());

    println!("{} Logged in as {}", "✓".green(), display_name(&session, &email).bold());
    Ok(())
}

/// Run the register command
pub async fn register(
    opts: &GlobalOptions,
    email: Option<String>,
    alias: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let email = prompt_if_missing(email, "Email")?;
    let alias = prompt_if_missing(alias, "Alias")?;
    let password = read_password(true)?;

    println!("{}", "Creating account...".cyan());
    let response = ctx.client.register(&email, &password, &alias).await;
    let message = response.message.clone();
    let session = response.into_result()?;

    println!(
        "{} {}",
        "✓".green(),
        message.unwrap_or_else(|| "Registration successful".to_string())
    );

    match session.token {
        Some(token) => {
            ctx.tokens.save(&token)?;
            println!("  Logged in as {}", alias.bold());
        }
        None => println!("  → Run {} to start a session", "pickme login".cyan()),
    }
    Ok(())
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !ctx.has_session() {
        return Err(ConfigError::NotLoggedIn.into());
    }

    ctx.tokens.remove()?;
    println!("{} Logged out", "✓".green());
    Ok(())
}

fn display_name(session: &Session, email: &str) -> String {
    session
        .profile
        .as_ref()
        .map(|profile| profile.alias.clone())
        .or_else(|| session.user.as_ref().map(|user| user.email.clone()))
        .unwrap_or_else(|| email.to_string())
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?),
    }
}

fn read_password(confirm: bool) -> Result<String> {
    if let Ok(password) = std::env::var(PASSWORD_ENV)
        && !password.is_empty()
    {
        return Ok(password);
    }

    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme).with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::{Account, ProfileSummary};

    #[test]
    fn test_display_name_prefers_alias() {
        let mut session = Session {
            token: Some("t".to_string()),
            user: Some(Account {
                id: "u1".to_string(),
                email: "jdoe@example.com".to_string(),
                created_at: None,
            }),
            profile: Some(ProfileSummary {
                id: "p1".to_string(),
                alias: "jdoe".to_string(),
                avatar: None,
                is_public: true,
            }),
        };
        assert_eq!(display_name(&session, "typed@example.com"), "jdoe");

        session.profile = None;
        assert_eq!(display_name(&session, "typed@example.com"), "jdoe@example.com");

        session.user = None;
        assert_eq!(display_name(&session, "typed@example.com"), "typed@example.com");
    }
}
