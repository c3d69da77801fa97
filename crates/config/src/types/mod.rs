//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the services sharing configuration and their key prefixes.
//! - Define the typed configuration a service reads at startup.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod service;
mod settings;

pub use service::Service;
pub use settings::{ConfigSummary, DatabaseConfig, ServerConfig, ServiceConfig, TokenConfig};
