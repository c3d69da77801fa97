//! Configuration resolution for the Token, Evaluation and Grading services.
//!
//! This crate discovers `.env` files, resolves settings with a
//! service-prefix fallback, and builds the typed configuration each
//! service reads at startup.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, Discovery, DiscoveryFailureReason, EnvSnapshot, EnvSource,
    LoadReport, Origin, ProcessEnv, RequiredCheck, Resolved, Resolver, SourceFile, SourceLoader,
    default_candidates, dotenv_disabled, env_var_or_none, load_sources, load_sources_into_process,
    parse_bool, parse_lifetime,
};
pub use types::{
    ConfigSummary, DatabaseConfig, ServerConfig, Service, ServiceConfig, TokenConfig,
};
