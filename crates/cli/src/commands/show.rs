//! Show command: list every known setting with its origin.
//!
//! Responsibilities:
//! - Resolve each key of the typed configuration, applying the same defaults.
//! - Report which variable (prefixed, unprefixed or default) supplied each value.
//!
//! Does NOT handle:
//! - Validating values (see `doctor`).
//!
//! Invariants:
//! - Values of secret keys are never printed, only whether they are set.

use anyhow::Result;
use evalkit_config::constants::{
    ALL_KEYS, DEFAULT_DB_HOST, DEFAULT_DB_POOL_MAX, DEFAULT_DB_POOL_MIN, DEFAULT_DB_PORT,
    DEFAULT_FRONTEND_URL, DEFAULT_JWT_EXPIRES_IN, KEY_DATABASE_URL, KEY_DB_HOST, KEY_DB_POOL_MAX,
    KEY_DB_POOL_MIN, KEY_DB_PORT, KEY_DB_SSL, KEY_FRONTEND_URL, KEY_JWT_EXPIRES_IN, KEY_PORT,
    REDACTED, SECRET_KEYS,
};
use evalkit_config::{Resolved, Service};
use serde::Serialize;

use crate::context::ConfigContext;
use crate::formatters::{OutputFormat, render_table, to_json};

const UNSET: &str = "(unset)";
const DERIVED: &str = "derived";

/// One row of the show output.
#[derive(Debug, Serialize)]
pub struct SettingRow {
    pub key: String,
    pub value: Option<String>,
    pub origin: Option<String>,
    pub secret: bool,
}

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub service: Service,
    pub prefix: String,
    pub settings: Vec<SettingRow>,
}

/// Run the show command.
pub fn run(ctx: &ConfigContext, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let resolver = ctx.resolver();

    let settings = ALL_KEYS
        .iter()
        .map(|key| {
            let default = default_for(key, ctx.service());
            setting_row(key, resolver.resolve_detailed(key, default.as_deref()))
        })
        .collect();

    let output = ShowOutput {
        service: ctx.service(),
        prefix: ctx.prefix().to_string(),
        settings,
    };

    match format {
        OutputFormat::Json => print!("{}", to_json(&output)?),
        OutputFormat::Table => print!("{}", format_table(&output)),
    }
    Ok(())
}

/// Default applied by the typed configuration, if the key has one.
fn default_for(key: &str, service: Service) -> Option<String> {
    match key {
        KEY_DB_HOST => Some(DEFAULT_DB_HOST.to_string()),
        KEY_DB_PORT => Some(DEFAULT_DB_PORT.to_string()),
        KEY_DB_POOL_MAX => Some(DEFAULT_DB_POOL_MAX.to_string()),
        KEY_DB_POOL_MIN => Some(DEFAULT_DB_POOL_MIN.to_string()),
        KEY_DB_SSL => Some("false".to_string()),
        KEY_JWT_EXPIRES_IN => Some(DEFAULT_JWT_EXPIRES_IN.to_string()),
        KEY_PORT => Some(service.default_port().to_string()),
        KEY_FRONTEND_URL => Some(DEFAULT_FRONTEND_URL.to_string()),
        _ => None,
    }
}

fn setting_row(key: &str, resolved: Option<Resolved>) -> SettingRow {
    let secret = SECRET_KEYS.contains(&key);
    match resolved {
        Some(resolved) => SettingRow {
            key: key.to_string(),
            value: Some(if secret {
                REDACTED.to_string()
            } else {
                resolved.value
            }),
            origin: Some(resolved.origin.to_string()),
            secret,
        },
        None => SettingRow {
            key: key.to_string(),
            value: None,
            origin: (key == KEY_DATABASE_URL).then(|| DERIVED.to_string()),
            secret,
        },
    }
}

fn format_table(output: &ShowOutput) -> String {
    let rows: Vec<Vec<String>> = output
        .settings
        .iter()
        .map(|row| {
            vec![
                row.key.clone(),
                row.value.clone().unwrap_or_else(|| UNSET.to_string()),
                row.origin.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    format!(
        "Service: {} (prefix {})\n\n{}",
        output.service,
        output.prefix,
        render_table(&["KEY", "VALUE", "ORIGIN"], &rows)
    )
}
