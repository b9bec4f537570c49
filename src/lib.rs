//! Secretmount - load secrets mounted as one file per secret.
//!
//! An orchestrator writes each secret to its own file under a known
//! directory (conventionally `/secrets`), plus hidden marker files such as
//! `.done`. This crate turns that directory into a name to value map once,
//! at startup.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── core/
//! │   ├── loader        # Directory listing, filtering, read-and-trim
//! │   ├── secrets       # Owned, zeroize-on-drop secret collection
//! │   ├── config        # Optional TOML section pointing at another dir
//! │   ├── env           # Secrets layered over the process environment
//! │   └── constants     # Mount conventions
//! └── error             # Error taxonomy and partial-load error
//! ```
//!
//! # Example
//!
//! ```no_run
//! let secrets = match secretmount::secrets() {
//!     Ok(secrets) => secrets,
//!     Err(e) => panic!("cannot load secrets: {e}"),
//! };
//! if let Some(token) = secrets.get("API_TOKEN") {
//!     assert!(!token.is_empty());
//! }
//! ```

pub mod core;
pub mod error;

pub use crate::core::config::Config;
pub use crate::core::env::SecretEnv;
pub use crate::core::loader::{load_secrets, load_with, secrets};
pub use crate::core::secrets::Secrets;
pub use crate::error::{Error, LoadError, Result};
