//! Environment variable sets used as resolution sources.
//!
//! Responsibilities:
//! - Define the `EnvSource` lookup seam shared by the live process environment
//!   and immutable snapshots.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Prefix-fallback resolution (see resolver.rs).
//! - `.env` file discovery (see sources.rs).
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - `ProcessEnv` is never cached: late mutation is visible on the next lookup.

use std::collections::BTreeMap;

/// Read access to a set of environment variables.
pub trait EnvSource {
    /// Raw value of `key`, exactly as stored.
    fn raw(&self, key: &str) -> Option<String>;

    /// Whether `key` is set at all, even to an empty value.
    fn contains(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    /// Value of `key`, or `None` if unset, empty, or whitespace-only.
    fn get(&self, key: &str) -> Option<String> {
        self.raw(key).and_then(present_value)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn raw(&self, key: &str) -> Option<String> {
        (**self).raw(key)
    }
}

/// Normalize a raw value: trimmed, or `None` when nothing remains.
fn present_value(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        // No trimming needed, return original to avoid allocation
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    ProcessEnv.get(key)
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn raw(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An immutable, explicitly passed copy of an environment variable set.
///
/// Captured once at startup (optionally merged with discovered `.env` files)
/// and threaded through consumers instead of reading process-global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// Set a variable only if it is not already present.
    ///
    /// Returns true if the value was inserted.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.vars.contains_key(&key) {
            return false;
        }
        self.vars.insert(key, value.into());
        true
    }

    /// Set a variable, replacing any previous value.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over all variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl EnvSource for EnvSnapshot {
    fn raw(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
