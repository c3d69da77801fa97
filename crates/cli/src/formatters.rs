//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Parse the `--output` flag into an `OutputFormat`.
//! - Render serializable command results as pretty JSON.
//!
//! Does NOT handle:
//! - Table layout (each command owns its human-readable rendering).
//!
//! Invariants:
//! - JSON output is a single document terminated by a newline.
//! - Secret values are redacted before they reach a formatter.

use anyhow::{Context, Result};
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: table, json", s),
        }
    }
}

/// Serialize `value` as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    output.push('\n');
    Ok(output)
}

/// Column-aligned rows separated by two spaces, one row per line.
pub fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.len());
            }
        }
    }

    let mut output = String::new();
    let mut push_row = |cells: Vec<&str>| {
        let line = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        output.push_str(line.trim_end());
        output.push('\n');
    };

    push_row(header.to_vec());
    for row in rows {
        push_row(row.iter().map(String::as_str).collect());
    }
    output
}
