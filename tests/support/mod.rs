//! Test support utilities for secretmount integration tests.
//!
//! Provides an isolated secrets directory per test.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::{Path, PathBuf};

use secretmount::{LoadError, Secrets};
use tempfile::TempDir;

/// A temporary secrets directory.
///
/// Each test gets its own directory, so tests can run in parallel.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    /// Create an empty secrets directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a secrets directory holding the given files.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (name, content) in files {
            t.write(name, content);
        }
        t
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write one file into the directory, the way a secret producer would.
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("failed to write secret file");
        path
    }

    pub fn mkdir(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::create_dir(&path).expect("failed to create subdirectory");
        path
    }

    pub fn load(&self) -> Result<Secrets, LoadError> {
        secretmount::load_secrets(self.path())
    }
}
