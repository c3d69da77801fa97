//! Prefix-fallback configuration resolution.
//!
//! Responsibilities:
//! - Look up `<PREFIX><NAME>`, then `<NAME>`, then a declared default.
//! - Report absent required keys without terminating the process.
//! - Parse typed values (booleans, numbers) with one explicit rule each.
//!
//! Does NOT handle:
//! - Loading `.env` files (see sources.rs).
//! - Assembling the typed `ServiceConfig` (see builder.rs).
//!
//! Invariants:
//! - A present prefixed key always wins over the unprefixed key.
//! - Empty or whitespace-only values count as absent (see env.rs).
//! - Nothing is cached: every call reads the underlying `EnvSource`.
//! - Resolved values are never logged, only the key they came from.

use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::env::{EnvSource, ProcessEnv};
use super::error::ConfigError;
use crate::constants::DEFAULT_PREFIX;
use crate::types::Service;

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// The service-scoped key, e.g. `EVALUATION_PORT`.
    Prefixed(String),
    /// The shared key, e.g. `PORT`.
    Unprefixed(String),
    /// The caller-supplied default.
    Default,
}

impl Origin {
    /// The variable name that supplied the value, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Origin::Prefixed(key) | Origin::Unprefixed(key) => Some(key),
            Origin::Default => None,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Prefixed(key) | Origin::Unprefixed(key) => f.write_str(key),
            Origin::Default => f.write_str("default"),
        }
    }
}

/// A value together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub origin: Origin,
}

/// Outcome of checking a set of required keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredCheck {
    missing: Vec<String>,
}

impl RequiredCheck {
    /// True when every required key resolved to a present value.
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    /// Required keys that were absent in both forms, in declaration order.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn into_missing(self) -> Vec<String> {
        self.missing
    }
}

/// Resolves configuration names against an environment variable set.
#[derive(Debug, Clone)]
pub struct Resolver<S = ProcessEnv> {
    source: S,
    prefix: String,
}

impl Default for Resolver<ProcessEnv> {
    fn default() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<S: EnvSource> Resolver<S> {
    /// Create a resolver using the default service prefix (`EVALUATION_`).
    pub fn new(source: S) -> Self {
        Self {
            source,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Create a resolver using the prefix of `service`.
    pub fn for_service(source: S, service: Service) -> Self {
        Self::new(source).with_prefix(service.prefix())
    }

    /// Override the prefix checked before the shared key.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve `name` with this resolver's prefix, falling back to `default`.
    pub fn resolve(&self, name: &str, default: Option<&str>) -> Option<String> {
        self.resolve_with_prefix(name, &self.prefix, default)
    }

    /// Resolve `name` with an explicit `prefix`, falling back to `default`.
    pub fn resolve_with_prefix(
        &self,
        name: &str,
        prefix: &str,
        default: Option<&str>,
    ) -> Option<String> {
        self.detailed(name, prefix, default).map(|r| r.value)
    }

    /// Resolve `name` and report which key (or the default) supplied it.
    pub fn resolve_detailed(&self, name: &str, default: Option<&str>) -> Option<Resolved> {
        self.detailed(name, &self.prefix, default)
    }

    /// Resolve `name`, failing with `MissingConfiguration` when absent.
    pub fn require_resolve(&self, name: &str) -> Result<String, ConfigError> {
        self.require_resolve_with_prefix(name, &self.prefix)
    }

    /// Resolve `name` with an explicit `prefix`, failing with `MissingConfiguration` when absent.
    pub fn require_resolve_with_prefix(
        &self,
        name: &str,
        prefix: &str,
    ) -> Result<String, ConfigError> {
        self.resolve_with_prefix(name, prefix, None)
            .ok_or_else(|| ConfigError::MissingConfiguration {
                name: name.to_string(),
                prefixed: format!("{prefix}{name}"),
            })
    }

    /// Check that every key in `required` resolves to a present value.
    ///
    /// Never fails; the caller decides what to do with the missing keys.
    pub fn validate_required<I, K>(&self, required: I) -> RequiredCheck
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut missing: Vec<String> = Vec::new();
        for key in required {
            let key = key.as_ref();
            if self.lookup(key, &self.prefix).is_none() && !missing.iter().any(|m| m == key) {
                missing.push(key.to_string());
            }
        }
        if !missing.is_empty() {
            debug!(prefix = %self.prefix, missing = ?missing, "Required configuration is incomplete");
        }
        RequiredCheck { missing }
    }

    /// Resolve a boolean flag.
    ///
    /// `true`/`1` and `false`/`0` (case-insensitive) are accepted; any other
    /// present value is an `InvalidValue` error.
    pub fn resolve_bool(&self, name: &str, default: bool) -> Result<bool, ConfigError> {
        match self.lookup(name, &self.prefix) {
            Some(resolved) => parse_bool(&origin_var(&resolved, name), &resolved.value),
            None => Ok(default),
        }
    }

    /// Resolve and parse a value with `FromStr`, using `default` when absent.
    ///
    /// `expected` describes the accepted format in the error message.
    pub fn resolve_parsed<T: FromStr>(
        &self,
        name: &str,
        default: T,
        expected: &str,
    ) -> Result<T, ConfigError> {
        match self.lookup(name, &self.prefix) {
            Some(resolved) => resolved
                .value
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    var: origin_var(&resolved, name),
                    message: format!("must be {expected}"),
                }),
            None => Ok(default),
        }
    }

    fn detailed(&self, name: &str, prefix: &str, default: Option<&str>) -> Option<Resolved> {
        self.lookup(name, prefix).or_else(|| {
            default.map(|value| {
                debug!(name, "Using default value");
                Resolved {
                    value: value.to_string(),
                    origin: Origin::Default,
                }
            })
        })
    }

    /// Check the prefixed key, then the unprefixed key.
    fn lookup(&self, name: &str, prefix: &str) -> Option<Resolved> {
        if name.is_empty() {
            return None;
        }

        if !prefix.is_empty() {
            let prefixed = format!("{prefix}{name}");
            if let Some(value) = self.source.get(&prefixed) {
                debug!(key = %prefixed, "Resolved from prefixed key");
                return Some(Resolved {
                    value,
                    origin: Origin::Prefixed(prefixed),
                });
            }
        }

        self.source.get(name).map(|value| {
            debug!(key = name, "Resolved from unprefixed key");
            Resolved {
                value,
                origin: Origin::Unprefixed(name.to_string()),
            }
        })
    }
}

/// Parse a boolean flag value: `true`/`1` or `false`/`0`, case-insensitive.
pub fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true, false, 1 or 0".to_string(),
        }),
    }
}

fn origin_var(resolved: &Resolved, name: &str) -> String {
    resolved.origin.key().unwrap_or(name).to_string()
}
