//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Discover `.env` files across ordered candidate paths and merge them.
//! - Resolve settings with prefix fallback (`<PREFIX><NAME>`, `<NAME>`, default).
//! - Provide a builder-pattern `ConfigLoader` producing the typed `ServiceConfig`.
//!
//! Does NOT handle:
//! - Terminating the process on missing configuration (callers decide).
//!
//! Invariants / Assumptions:
//! - Ambient environment variables are never overridden by `.env` files.
//! - The first candidate file defining a key wins.
//! - The `DOTENV_DISABLED` variable is checked before any candidate is read.

mod builder;
mod env;
mod error;
mod resolver;
mod sources;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, parse_lifetime};
pub use env::{EnvSnapshot, EnvSource, ProcessEnv, env_var_or_none};
pub use error::{ConfigError, DiscoveryFailureReason};
pub use resolver::{Origin, RequiredCheck, Resolved, Resolver, parse_bool};
pub use sources::{
    Discovery, LoadReport, SourceFile, SourceLoader, default_candidates, dotenv_disabled,
    load_sources, load_sources_into_process,
};
