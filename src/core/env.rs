//! Secrets layered over the process environment.
//!
//! Lookups prefer a loaded secret and fall back to the environment
//! variable of the same name. The process environment itself is never
//! modified; child processes receive secrets through [`SecretEnv::apply`].

use std::collections::BTreeSet;
use std::process::Command;

use tracing::debug;

use crate::core::secrets::Secrets;
use crate::error::{Error, Result};

/// Read-only view of secrets over `std::env`.
#[derive(Debug)]
pub struct SecretEnv {
    secrets: Secrets,
}

impl SecretEnv {
    pub fn new(secrets: Secrets) -> Self {
        Self { secrets }
    }

    /// Secret value, or the environment variable when no secret has that name.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.secrets.get(key) {
            Some(value) => Some(value.to_string()),
            None => std::env::var(key).ok(),
        }
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Like [`get`](Self::get), but a missing key is an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::Missing` if neither a secret nor an environment
    /// variable has that name.
    pub fn fetch(&self, key: &str) -> Result<String> {
        self.get(key).ok_or_else(|| Error::Missing(key.to_string()))
    }

    /// Whether `key` came from the secrets directory.
    pub fn is_secret(&self, key: &str) -> bool {
        self.secrets.contains(key)
    }

    /// Secret names and environment variable names, sorted and deduplicated.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: BTreeSet<String> = std::env::vars_os()
            .filter_map(|(k, _)| k.into_string().ok())
            .collect();
        keys.extend(self.secrets.names().map(str::to_string));
        keys.into_iter().collect()
    }

    /// Inject every secret into a child command's environment.
    ///
    /// Secrets override variables the child would otherwise inherit.
    pub fn apply<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        debug!(count = self.secrets.len(), "Injecting secrets into command");
        cmd.envs(self.secrets.iter())
    }

    pub fn secrets(&self) -> &Secrets {
        &self.secrets
    }

    pub fn into_secrets(self) -> Secrets {
        self.secrets
    }
}
