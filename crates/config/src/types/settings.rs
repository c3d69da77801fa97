//! Typed service configuration.
//!
//! Responsibilities:
//! - Define the resolved settings a service reads at startup (database, token, server).
//! - Provide a redacted summary suitable for printing.
//!
//! Does NOT handle:
//! - Resolving values from the environment (see `loader` module).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - `ConfigSummary` never contains secret material.

use secrecy::SecretString;
use serde::Serialize;
use std::time::Duration;

use crate::constants::REDACTED;
use crate::types::service::Service;

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: SecretString,
    pub name: String,
    pub port: u16,
    /// Full connection string, either `DATABASE_URL` or derived from the fields above.
    pub url: SecretString,
    pub pool_max: u32,
    pub pool_min: u32,
    pub ssl: bool,
}

/// Token signing settings.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: SecretString,
    /// Lifetime as written in configuration (e.g. `24h`).
    pub expires_in: String,
    /// Lifetime parsed from `expires_in`.
    pub lifetime: Duration,
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Allowed frontend origin, normalized without a trailing slash.
    pub frontend_url: String,
}

/// Complete configuration of one service, built once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub service: Service,
    pub database: DatabaseConfig,
    pub token: TokenConfig,
    pub server: ServerConfig,
}

impl ServiceConfig {
    /// Returns a printable view with every secret replaced by a placeholder.
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            service: self.service,
            db_host: self.database.host.clone(),
            db_user: self.database.user.clone(),
            db_password: REDACTED.to_string(),
            db_name: self.database.name.clone(),
            db_port: self.database.port,
            database_url: REDACTED.to_string(),
            db_pool_max: self.database.pool_max,
            db_pool_min: self.database.pool_min,
            db_ssl: self.database.ssl,
            jwt_secret: REDACTED.to_string(),
            jwt_expires_in: self.token.expires_in.clone(),
            port: self.server.port,
            frontend_url: self.server.frontend_url.clone(),
        }
    }
}

/// Redacted configuration summary.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub service: Service,
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_port: u16,
    pub database_url: String,
    pub db_pool_max: u32,
    pub db_pool_min: u32,
    pub db_ssl: bool,
    pub jwt_secret: String,
    pub jwt_expires_in: String,
    pub port: u16,
    pub frontend_url: String,
}
