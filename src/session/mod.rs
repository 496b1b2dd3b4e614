//! Session token storage
//!
//! The token store exclusively owns the session token. The API client only
//! reads it; login, logout and invalid-session handling in the CLI write it.

use std::path::PathBuf;
use std::sync::RwLock;

use log::debug;

use crate::config::Config;
use crate::error::Result;

/// Storage for the opaque session token
pub trait TokenStore: Send + Sync {
    /// Current token, if any
    fn get(&self) -> Option<String>;

    /// Persist a new token, replacing any previous one
    fn save(&self, token: &str) -> Result<()>;

    /// Forget the stored token
    fn remove(&self) -> Result<()>;
}

/// Token store backed by the `token` field of the config file.
///
/// The token is cached in memory so reads before each request do not touch
/// the filesystem.
pub struct ConfigTokenStore {
    path: PathBuf,
    token: RwLock<Option<String>>,
}

impl ConfigTokenStore {
    /// Create a store for the config file at `path`, seeded from `config`
    pub fn new(path: PathBuf, config: &Config) -> Self {
        Self {
            path,
            token: RwLock::new(config.token.clone()),
        }
    }

    fn write_through(&self, token: Option<&str>) -> Result<()> {
        let mut config = match Config::load_from(self.path.clone()) {
            Ok(config) => config,
            Err(crate::error::Error::Config(crate::error::ConfigError::NotFound)) => {
                Config::default()
            }
            Err(e) => return Err(e),
        };
        config.token = token.map(str::to_string);
        config.save_to(self.path.clone())?;

        *self.token.write().unwrap_or_else(|e| e.into_inner()) = config.token;
        Ok(())
    }
}

impl TokenStore for ConfigTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, token: &str) -> Result<()> {
        debug!("Saving session token to {}", self.path.display());
        self.write_through(Some(token))
    }

    fn remove(&self) -> Result<()> {
        debug!("Removing session token from {}", self.path.display());
        self.write_through(None)
    }
}

/// In-memory token store
#[cfg(test)]
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryTokenStore::new();
        assert!(store.get().is_none());

        store.save("abc").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc"));

        store.save("def").unwrap();
        assert_eq!(store.get().as_deref(), Some("def"));

        store.remove().unwrap();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_config_store_persists_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let store = ConfigTokenStore::new(path.clone(), &Config::default());
        assert!(store.get().is_none());

        store.save("persisted-token").unwrap();
        assert_eq!(store.get().as_deref(), Some("persisted-token"));

        let on_disk = Config::load_from(path.clone()).unwrap();
        assert_eq!(on_disk.token.as_deref(), Some("persisted-token"));

        store.remove().unwrap();
        assert!(store.get().is_none());
        let on_disk = Config::load_from(path).unwrap();
        assert!(on_disk.token.is_none());
    }

    #[test]
    fn test_config_store_keeps_other_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let config = Config {
            api_url: Some("http://localhost:8745/api/v1".to_string()),
            ..Config::default()
        };
        config.save_to(path.clone()).unwrap();

        let store = ConfigTokenStore::new(path.clone(), &config);
        store.save("t").unwrap();

        let on_disk = Config::load_from(path).unwrap();
        assert_eq!(
            on_disk.api_url.as_deref(),
            Some("http://localhost:8745/api/v1")
        );
        assert_eq!(on_disk.token.as_deref(), Some("t"));
    }
}
