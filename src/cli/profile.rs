//! Profile command handlers

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, ProfileUpdateArgs};
use crate::client::ProfileApi;
use crate::client::models::ProfileUpdate;
use crate::error::{Error, Result};
use crate::models::profile_rows;
use crate::output::{Details, Formattable};

/// Show the own profile, or the profile of `user_id`
pub async fn show(opts: &GlobalOptions, user_id: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let response = match user_id {
        Some(id) => ctx.client.get_user_profile(id).await,
        None => ctx.client.get_profile().await,
    };
    let profile = ctx.settle(response)?;

    Details::new(&profile, profile_rows(&profile)).print(ctx.format)
}

/// Send the changed fields of the own profile
pub async fn update(opts: &GlobalOptions, args: ProfileUpdateArgs) -> Result<()> {
    let update = ProfileUpdate::from(args);
    if update.is_empty() {
        return Err(Error::Other(
            "nothing to update, pass at least one field".to_string(),
        ));
    }

    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let profile = ctx.settle(ctx.client.update_profile(&update).await)?;

    println!("{} Profile updated", "✓".green());
    Details::new(&profile, profile_rows(&profile)).print(ctx.format)
}

impl From<ProfileUpdateArgs> for ProfileUpdate {
    fn from(args: ProfileUpdateArgs) -> Self {
        let is_public = match (args.public, args.private) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        ProfileUpdate {
            alias: args.alias,
            birthdate: args.birthdate,
            country: args.country,
            language: args.language,
            description: args.description,
            pronouns: args.pronouns,
            avatar: args.avatar,
            is_public,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_from_args() {
        let args = ProfileUpdateArgs {
            country: Some("France".to_string()),
            private: true,
            ..ProfileUpdateArgs::default()
        };

        let update = ProfileUpdate::from(args);

        assert_eq!(update.country.as_deref(), Some("France"));
        assert_eq!(update.is_public, Some(false));
        assert!(update.alias.is_none());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_no_flags_is_empty_update() {
        assert!(ProfileUpdate::from(ProfileUpdateArgs::default()).is_empty());
    }
}
