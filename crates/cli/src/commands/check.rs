//! Check command: verify that every required key is present.
//!
//! Responsibilities:
//! - Run `validate_required` over the default required keys or the `--require` list.
//! - Print the missing keys with both forms that were checked.
//!
//! Does NOT handle:
//! - Parsing or range-checking values (see `doctor`).

use anyhow::Result;
use evalkit_config::Service;
use evalkit_config::constants::DEFAULT_REQUIRED_KEYS;
use serde::Serialize;
use tracing::info;

use crate::context::ConfigContext;
use crate::error::CliError;
use crate::formatters::{OutputFormat, to_json};

/// Result of a required-key check.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub service: Service,
    pub prefix: String,
    pub valid: bool,
    pub required: Vec<String>,
    pub missing: Vec<String>,
}

/// Run the check command.
///
/// Returns `CliError::MissingConfiguration` when any key is absent.
pub fn run(ctx: &ConfigContext, require: Vec<String>, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    let required: Vec<String> = if require.is_empty() {
        DEFAULT_REQUIRED_KEYS.iter().map(|k| k.to_string()).collect()
    } else {
        require
    };

    info!(service = %ctx.service(), keys = required.len(), "Checking required configuration");
    let check = ctx.resolver().validate_required(&required);

    let output = CheckOutput {
        service: ctx.service(),
        prefix: ctx.prefix().to_string(),
        valid: check.is_valid(),
        required,
        missing: check.into_missing(),
    };

    match format {
        OutputFormat::Json => print!("{}", to_json(&output)?),
        OutputFormat::Table => print!("{}", format_table(&output)),
    }

    if output.valid {
        Ok(())
    } else {
        Err(CliError::MissingConfiguration {
            missing: output.missing,
        }
        .into())
    }
}

fn format_table(output: &CheckOutput) -> String {
    if output.valid {
        return format!(
            "OK: all {} required key(s) present for the {} service\n",
            output.required.len(),
            output.service
        );
    }

    let mut text = format!(
        "Missing {} of {} required key(s) for the {} service:\n",
        output.missing.len(),
        output.required.len(),
        output.service
    );
    for key in &output.missing {
        text.push_str(&format!("  {key} (checked {}{key}, {key})\n", output.prefix));
    }
    text
}
