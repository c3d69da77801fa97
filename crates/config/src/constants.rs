//! Centralized constants for the evalkit workspace.
//!
//! This module contains configuration key names and default values used
//! across crates to avoid magic string and number duplication.

// =============================================================================
// Service Prefixes
// =============================================================================

/// Prefix for Token System keys.
pub const TOKEN_PREFIX: &str = "TOKEN_";

/// Prefix for Evaluation System keys.
pub const EVALUATION_PREFIX: &str = "EVALUATION_";

/// Prefix for Grading System keys.
pub const GRADING_PREFIX: &str = "GRADING_";

/// Prefix used when a resolver is created without an explicit service.
pub const DEFAULT_PREFIX: &str = EVALUATION_PREFIX;

// =============================================================================
// Configuration Keys
// =============================================================================

pub const KEY_DB_HOST: &str = "DB_HOST";
pub const KEY_DB_USER: &str = "DB_USER";
pub const KEY_DB_PASSWORD: &str = "DB_PASSWORD";
pub const KEY_DB_NAME: &str = "DB_NAME";
pub const KEY_DB_PORT: &str = "DB_PORT";
pub const KEY_DATABASE_URL: &str = "DATABASE_URL";
pub const KEY_DB_POOL_MAX: &str = "DB_POOL_MAX";
pub const KEY_DB_POOL_MIN: &str = "DB_POOL_MIN";
pub const KEY_DB_SSL: &str = "DB_SSL";
pub const KEY_JWT_SECRET: &str = "JWT_SECRET";
pub const KEY_JWT_EXPIRES_IN: &str = "JWT_EXPIRES_IN";
pub const KEY_PORT: &str = "PORT";
pub const KEY_FRONTEND_URL: &str = "FRONTEND_URL";

/// Every key the typed configuration reads, in display order.
pub const ALL_KEYS: &[&str] = &[
    KEY_DB_HOST,
    KEY_DB_USER,
    KEY_DB_PASSWORD,
    KEY_DB_NAME,
    KEY_DB_PORT,
    KEY_DATABASE_URL,
    KEY_DB_POOL_MAX,
    KEY_DB_POOL_MIN,
    KEY_DB_SSL,
    KEY_JWT_SECRET,
    KEY_JWT_EXPIRES_IN,
    KEY_PORT,
    KEY_FRONTEND_URL,
];

/// Keys whose values must never be printed.
pub const SECRET_KEYS: &[&str] = &[KEY_DB_PASSWORD, KEY_DATABASE_URL, KEY_JWT_SECRET];

/// Keys a service cannot start without.
pub const DEFAULT_REQUIRED_KEYS: &[&str] =
    &[KEY_DB_USER, KEY_DB_PASSWORD, KEY_DB_NAME, KEY_JWT_SECRET];

// =============================================================================
// Defaults
// =============================================================================

/// Default database host.
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default PostgreSQL port.
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Default upper bound of the connection pool.
pub const DEFAULT_DB_POOL_MAX: u32 = 10;

/// Default lower bound of the connection pool.
pub const DEFAULT_DB_POOL_MIN: u32 = 0;

/// Default token lifetime.
pub const DEFAULT_JWT_EXPIRES_IN: &str = "24h";

/// Default allowed frontend origin.
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Default listen port of the Token System.
pub const DEFAULT_TOKEN_PORT: u16 = 3001;

/// Default listen port of the Evaluation System.
pub const DEFAULT_EVALUATION_PORT: u16 = 3002;

/// Default listen port of the Grading System.
pub const DEFAULT_GRADING_PORT: u16 = 3003;

// =============================================================================
// Source Discovery
// =============================================================================

/// Name of the shared `.env` file.
pub const DOTENV_FILE_NAME: &str = ".env";

/// Setting this variable to `1` or `true` disables `.env` loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Placeholder printed instead of secret values.
pub const REDACTED: &str = "********";
