//! Loader configuration.
//!
//! Callers that mount secrets somewhere other than `/secrets` embed this
//! section in their own TOML configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{Error, Result};

fn default_dir() -> PathBuf {
    PathBuf::from(constants::SECRETS_DIR)
}

/// Where to load secrets from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Secrets directory (defaults to `/secrets`)
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Config {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Parse a TOML fragment such as `dir = "/var/run/secrets"`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the fragment is malformed or names an
    /// empty directory.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        debug!("secrets dir configured: {}", config.dir.display());
        Ok(config)
    }

    /// Directory to load from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn validate(&self) -> Result<()> {
        if self.dir.as_os_str().is_empty() {
            return Err(Error::Config("secrets dir cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}
