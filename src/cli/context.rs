//! Command execution context
//!
//! Loads the config, wires the token store into the API client and resolves
//! the output format, so handlers only deal with their own command.

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};

use crate::cli::{GlobalOptions, OutputFormat, PaginationArgs};
use crate::client::{ApiResponse, PageParams, PickMeClient};
use crate::config::Config;
use crate::error::{ApiError, ErrorKind, Result};
use crate::session::{ConfigTokenStore, TokenStore};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    pub config: Config,
    /// Config file backing the token store
    pub config_path: PathBuf,
    pub tokens: Arc<ConfigTokenStore>,
    pub client: Arc<PickMeClient>,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a context from the global options.
    ///
    /// A missing config file is not an error: defaults apply until the first
    /// login writes one.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_or_default(opts.config_ref())?;

        let tokens = Arc::new(ConfigTokenStore::new(config_path.clone(), &config));
        let store: Arc<dyn TokenStore> = tokens.clone();
        let api_url = config.api_url(opts.api_url_ref());
        debug!("Using API at {}", api_url);
        let client = PickMeClient::with_options(api_url, store, config.client.to_options())?;

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::parse)
            })
            .unwrap_or_default();

        Ok(Self {
            config,
            config_path,
            tokens,
            client: Arc::new(client),
            format,
        })
    }

    pub fn has_session(&self) -> bool {
        self.tokens.get().is_some()
    }

    /// Fail fast when no session token is stored
    pub fn require_session(&self) -> Result<()> {
        if self.has_session() {
            Ok(())
        } else {
            Err(ApiError::MissingToken.into())
        }
    }

    /// Page parameters from CLI flags, defaulting to the configured page size
    pub fn page_params(&self, args: &PaginationArgs) -> PageParams {
        args.to_page_params(self.config.preferences.page_size)
    }

    /// Unwrap a client result; an unauthorized outcome ends the session.
    pub fn settle<T>(&self, response: ApiResponse<T>) -> Result<T> {
        if response.error == Some(ErrorKind::Unauthorized) {
            self.invalidate_session()?;
        }
        response.into_result()
    }

    /// Forget the stored token after the server rejected it
    pub fn invalidate_session(&self) -> Result<()> {
        if self.has_session() {
            warn!("Session rejected by the server, removing stored token");
            self.tokens.remove()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn options_for(path: &std::path::Path) -> GlobalOptions {
        GlobalOptions {
            config: Some(path.to_string_lossy().to_string()),
            ..GlobalOptions::default()
        }
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp = tempdir().unwrap();
        let ctx = CommandContext::new(&options_for(&temp.path().join("config.yaml"))).unwrap();

        assert!(!ctx.has_session());
        assert_eq!(ctx.format, OutputFormat::Table);
        assert_eq!(ctx.config.preferences.page_size, 20);
        assert!(ctx.require_session().is_err());
    }

    #[test]
    fn test_format_precedence() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "preferences:\n  format: json\n  page_size: 7\n").unwrap();

        let ctx = CommandContext::new(&options_for(&path)).unwrap();
        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(ctx.page_params(&PaginationArgs::default()).limit, 7);

        let opts = GlobalOptions {
            format: Some(OutputFormat::Table),
            ..options_for(&path)
        };
        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.format, OutputFormat::Table);
    }

    #[test]
    fn test_api_url_override() {
        let temp = tempdir().unwrap();
        let opts = GlobalOptions {
            api_url: Some("http://localhost:9000/api/v1/".to_string()),
            ..options_for(&temp.path().join("config.yaml"))
        };

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.client.base_url(), "http://localhost:9000/api/v1");
    }

    #[test]
    fn test_unauthorized_removes_token() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "token: stale\n").unwrap();

        let ctx = CommandContext::new(&options_for(&path)).unwrap();
        assert!(ctx.has_session());

        let response = ApiResponse::<()>::failure(&ApiError::Unauthorized("Token expired".into()));
        let err = ctx.settle(response).unwrap_err();

        assert_eq!(err.to_string(), "Token expired");
        assert!(!ctx.has_session());
        let saved = Config::load_from(path).unwrap();
        assert!(saved.token.is_none());
    }

    #[test]
    fn test_other_failures_keep_token() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "token: good\n").unwrap();

        let ctx = CommandContext::new(&options_for(&path)).unwrap();
        let response = ApiResponse::<()>::failure(&ApiError::Server("boom".into()));

        assert!(ctx.settle(response).is_err());
        assert!(ctx.has_session());
    }

    #[test]
    fn test_settle_success() {
        let temp = tempdir().unwrap();
        let ctx = CommandContext::new(&options_for(&temp.path().join("config.yaml"))).unwrap();
        assert_eq!(ctx.settle(ApiResponse::ok(5)).unwrap(), 5);
    }
}
