//! Constants used throughout secretmount.
//!
//! Centralizes the mount conventions shared with the secret producer.

/// Conventional mount point for secrets (one file per secret).
pub const SECRETS_DIR: &str = "/secrets";

/// Name prefix of entries that are markers, not secrets (e.g. `.done`).
pub const HIDDEN_PREFIX: char = '.';
