//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for configuration resolution and source discovery failures.
//! - Describe dotenv failures without exposing file contents.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Discovery failures NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required key was absent in both its prefixed and unprefixed form.
    #[error("Missing required configuration: {name} (also checked {prefixed})")]
    MissingConfiguration { name: String, prefixed: String },

    /// A candidate `.env` file existed but could not be read or parsed.
    #[error("Failed to load {path}: {reason}")]
    FileDiscoveryFailure {
        path: PathBuf,
        reason: DiscoveryFailureReason,
    },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

impl ConfigError {
    /// Returns true if this error reports an absent required key.
    pub fn is_missing(&self) -> bool {
        matches!(self, ConfigError::MissingConfiguration { .. })
    }
}

/// Why a candidate file was skipped.
///
/// SAFETY: Variants only carry the byte index of a parse failure or the I/O
/// error kind, NOT the offending line content, to prevent leaking secrets.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryFailureReason {
    #[error("invalid syntax at position {error_index}")]
    Parse { error_index: usize },

    #[error("read error ({kind})")]
    Io { kind: ErrorKind },

    #[error("unknown dotenv error")]
    Unknown,
}

impl From<&dotenvy::Error> for DiscoveryFailureReason {
    fn from(error: &dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, idx) => DiscoveryFailureReason::Parse { error_index: *idx },
            dotenvy::Error::Io(io_err) => DiscoveryFailureReason::Io {
                kind: io_err.kind(),
            },
            _ => DiscoveryFailureReason::Unknown,
        }
    }
}
