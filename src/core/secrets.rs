//! Secret collection.
//!
//! The owned name to value mapping produced by the loader. Values are
//! wiped from memory when the collection is dropped.

use std::collections::BTreeMap;
use std::fmt;

use zeroize::Zeroize;

/// Secrets keyed by file name.
#[derive(Default, PartialEq, Eq)]
pub struct Secrets {
    entries: BTreeMap<String, String>,
}

impl Secrets {
    pub(crate) fn insert(&mut self, name: String, value: String) {
        if let Some(mut old) = self.entries.insert(name, value) {
            old.zeroize();
        }
    }

    /// Value of a secret, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Secret names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, value)` pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand the plain map to the caller.
    ///
    /// Values moved out this way are no longer wiped on drop.
    pub fn into_map(mut self) -> BTreeMap<String, String> {
        std::mem::take(&mut self.entries)
    }
}

impl Drop for Secrets {
    fn drop(&mut self) {
        for value in self.entries.values_mut() {
            value.zeroize();
        }
    }
}

// Values are redacted so a stray `{:?}` never leaks them.
impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.keys().map(|k| (k, "<redacted>")))
            .finish()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Secrets {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut secrets = Secrets::default();
        for (name, value) in pairs {
            secrets.insert(name.to_string(), value.to_string());
        }
        secrets
    }
}
