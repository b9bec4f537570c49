//! Secret loader.
//!
//! Reads a directory where every non-hidden entry is one secret: the file
//! name is the secret name and the trimmed file content is its value.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::secrets::Secrets;
use crate::error::{Error, LoadError};

/// Load secrets from the conventional `/secrets` mount.
///
/// # Errors
///
/// See [`load_secrets`].
pub fn secrets() -> Result<Secrets, LoadError> {
    load_with(&Config::default())
}

/// Load secrets from the directory named by `config`.
pub fn load_with(config: &Config) -> Result<Secrets, LoadError> {
    load_secrets(config.dir())
}

/// Load every non-hidden entry of `dir` as a secret.
///
/// Entries are read in file name order. Entries whose name starts with `.`
/// are skipped without being opened. The listing is not recursive; a
/// subdirectory is read like any other entry and therefore fails.
///
/// Values must be UTF-8 text. Binary content (a keystore, say) is rejected
/// rather than passed through, so mount such secrets base64-encoded.
///
/// # Errors
///
/// Returns a `LoadError` wrapping `Error::DirectoryAccess` (with an empty
/// partial collection) if `dir` cannot be listed, or `Error::FileRead` as
/// soon as one entry cannot be read as UTF-8 text. The partial collection
/// then holds every secret whose name sorts before the failing entry.
pub fn load_secrets(dir: impl AsRef<Path>) -> Result<Secrets, LoadError> {
    let dir = dir.as_ref();
    let mut secrets = Secrets::default();

    debug!("Loading secrets from: {}", dir.display());

    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(source) => {
            let error = Error::DirectoryAccess {
                path: dir.to_path_buf(),
                source,
            };
            return Err(LoadError::new(error, secrets));
        }
    };

    // Name order: the partial result is every name sorting before a failure.
    let mut entries = Vec::new();
    for entry in listing {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(source) => {
                let error = Error::FileRead {
                    path: dir.to_path_buf(),
                    source,
                };
                return Err(LoadError::new(error, secrets));
            }
        }
    }
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let file_name = entry.file_name();
        if file_name
            .to_string_lossy()
            .starts_with(constants::HIDDEN_PREFIX)
        {
            trace!(name = %file_name.to_string_lossy(), "skipping hidden entry");
            continue;
        }

        let path = entry.path();
        let name = match file_name.into_string() {
            Ok(name) => name,
            Err(_) => {
                let error = Error::FileRead {
                    path,
                    source: io::Error::new(io::ErrorKind::InvalidData, "file name is not UTF-8"),
                };
                return Err(LoadError::new(error, secrets));
            }
        };

        match read_value(&path) {
            Ok(value) => {
                trace!(name = %name, "loaded secret");
                secrets.insert(name, value);
            }
            Err(source) => {
                let error = Error::FileRead { path, source };
                return Err(LoadError::new(error, secrets));
            }
        }
    }

    debug!(count = secrets.len(), "Secrets loaded");
    Ok(secrets)
}

/// Read a file as UTF-8 and strip surrounding whitespace.
fn read_value(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let mut raw = String::from_utf8(bytes).map_err(|e| {
        let mut bytes = e.into_bytes();
        bytes.zeroize();
        io::Error::new(io::ErrorKind::InvalidData, "secret is not valid UTF-8")
    })?;

    let value = raw.trim().to_string();
    raw.zeroize();
    Ok(value)
}
