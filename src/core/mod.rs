//! Core library components.
//!
//! Loading, holding and exposing secrets mounted as files.

pub mod config;
pub mod constants;
pub mod env;
pub mod loader;
pub mod secrets;
