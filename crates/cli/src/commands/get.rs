//! Get command: print the resolved value of one key.

use anyhow::Result;
use serde::Serialize;

use crate::context::ConfigContext;
use crate::formatters::{OutputFormat, to_json};

#[derive(Debug, Serialize)]
pub struct GetOutput {
    pub name: String,
    pub value: Option<String>,
    /// Variable that supplied the value, or `default`.
    pub origin: Option<String>,
}

/// Run the get command.
///
/// An absent key prints nothing unless `required` is set, in which case the
/// `MissingConfiguration` error is returned.
pub fn run(
    ctx: &ConfigContext,
    name: &str,
    default: Option<&str>,
    required: bool,
    output_format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let resolver = ctx.resolver();

    let resolved = resolver.resolve_detailed(name, default);
    if resolved.is_none() && required {
        resolver.require_resolve(name)?;
    }

    match format {
        OutputFormat::Json => {
            let output = GetOutput {
                name: name.to_string(),
                value: resolved.as_ref().map(|r| r.value.clone()),
                origin: resolved.as_ref().map(|r| r.origin.to_string()),
            };
            print!("{}", to_json(&output)?);
        }
        OutputFormat::Table => {
            if let Some(resolved) = resolved {
                println!("{}", resolved.value);
            }
        }
    }

    Ok(())
}
