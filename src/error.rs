use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::secrets::Secrets;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot list secrets directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read secret {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("secret not found: {0}")]
    Missing(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// A failed load, together with whatever was read before the failure.
///
/// The partial collection is never complete: a directory error leaves it
/// empty, a file error stops at the first unreadable entry.
#[derive(Debug)]
pub struct LoadError {
    error: Error,
    partial: Secrets,
}

impl LoadError {
    pub(crate) fn new(error: Error, partial: Secrets) -> Self {
        Self { error, partial }
    }

    /// The underlying error.
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Secrets read before the failure.
    pub fn partial(&self) -> &Secrets {
        &self.partial
    }

    pub fn into_parts(self) -> (Error, Secrets) {
        (self.error, self.partial)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<LoadError> for Error {
    fn from(e: LoadError) -> Self {
        e.error
    }
}
