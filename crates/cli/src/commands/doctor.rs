//! Doctor command for configuration diagnostics.
//!
//! Responsibilities:
//! - Report which `.env` candidates were found, loaded or skipped.
//! - Validate the required keys and the typed configuration build.
//! - Check that the configured server port can be bound on the loopback interface.
//!
//! Does NOT handle:
//! - Connecting to the database or any other service.
//! - Output formatting details (see formatters module).
//!
//! Invariants:
//! - Secret values never appear in check messages or details.
//! - Any `Fail` check makes the command exit non-zero.

use anyhow::Result;
use evalkit_config::constants::DEFAULT_REQUIRED_KEYS;
use evalkit_config::{Service, ServiceConfig};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, TcpListener};
use tracing::info;

use crate::context::ConfigContext;
use crate::error::CliError;
use crate::formatters::{OutputFormat, to_json};

/// Result of a single diagnostic check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Status of a diagnostic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
    Skipped,
}

impl CheckStatus {
    fn label(self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Warning => "WARN",
            CheckStatus::Skipped => "SKIP",
        }
    }
}

/// Complete diagnostic report.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub cli_version: String,
    pub service: Service,
    pub prefix: String,
    pub checks: Vec<DiagnosticCheck>,
}

impl DiagnosticReport {
    fn failed(&self) -> usize {
        self.checks
            .iter()
            .filter(|check| check.status == CheckStatus::Fail)
            .count()
    }
}

/// Run the doctor diagnostic command.
///
/// Returns `CliError::DiagnosticsFailed` if any check fails.
pub fn run(ctx: &ConfigContext, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    info!(service = %ctx.service(), "Running doctor diagnostics...");

    let mut checks = vec![run_sources_check(ctx), run_required_check(ctx)];

    let config = ctx.build_config();
    match &config {
        Ok(config) => {
            checks.push(DiagnosticCheck {
                name: "config_build".to_string(),
                status: CheckStatus::Pass,
                message: format!("Built {} service configuration", config.service),
                details: Some(serde_json::to_value(config.summary())?),
            });
            checks.push(run_port_check(config));
        }
        Err(e) => {
            checks.push(DiagnosticCheck {
                name: "config_build".to_string(),
                status: CheckStatus::Fail,
                message: e.to_string(),
                details: None,
            });
            checks.push(DiagnosticCheck {
                name: "port_bind".to_string(),
                status: CheckStatus::Skipped,
                message: "Skipped because the configuration could not be built".to_string(),
                details: None,
            });
        }
    }

    let report = DiagnosticReport {
        cli_version: env!("CARGO_PKG_VERSION").to_string(),
        service: ctx.service(),
        prefix: ctx.prefix().to_string(),
        checks,
    };

    match format {
        OutputFormat::Json => print!("{}", to_json(&report)?),
        OutputFormat::Table => print!("{}", format_table(&report)),
    }

    match report.failed() {
        0 => Ok(()),
        failed => Err(CliError::DiagnosticsFailed { failed }.into()),
    }
}

fn run_sources_check(ctx: &ConfigContext) -> DiagnosticCheck {
    let report = ctx.report();
    let candidates: Vec<String> = ctx
        .candidates()
        .iter()
        .map(|path| path.display().to_string())
        .collect();

    if report.disabled {
        return DiagnosticCheck {
            name: "env_files".to_string(),
            status: CheckStatus::Skipped,
            message: ".env discovery is disabled".to_string(),
            details: None,
        };
    }

    let loaded: Vec<String> = report
        .loaded
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    let failures: Vec<String> = report.failures.iter().map(|e| e.to_string()).collect();
    let details = serde_json::json!({
        "candidates": candidates,
        "loaded": loaded,
        "failures": failures,
        "keys_added": report.keys_added,
    });

    let (status, message) = if !failures.is_empty() {
        (
            CheckStatus::Warning,
            format!("{} .env file(s) could not be read and were skipped", failures.len()),
        )
    } else if loaded.is_empty() {
        (
            CheckStatus::Warning,
            "No .env files found, using the process environment only".to_string(),
        )
    } else {
        (
            CheckStatus::Pass,
            format!(
                "Loaded {} .env file(s), {} new key(s)",
                loaded.len(),
                report.keys_added
            ),
        )
    };

    DiagnosticCheck {
        name: "env_files".to_string(),
        status,
        message,
        details: Some(details),
    }
}

fn run_required_check(ctx: &ConfigContext) -> DiagnosticCheck {
    let check = ctx.resolver().validate_required(DEFAULT_REQUIRED_KEYS);
    if check.is_valid() {
        DiagnosticCheck {
            name: "required_keys".to_string(),
            status: CheckStatus::Pass,
            message: format!("All {} required keys are set", DEFAULT_REQUIRED_KEYS.len()),
            details: None,
        }
    } else {
        DiagnosticCheck {
            name: "required_keys".to_string(),
            status: CheckStatus::Fail,
            message: format!("Missing: {}", check.missing().join(", ")),
            details: Some(serde_json::json!({ "missing": check.missing() })),
        }
    }
}

/// Binding failures are reported as warnings, not failures.
fn run_port_check(config: &ServiceConfig) -> DiagnosticCheck {
    let port = config.server.port;
    match TcpListener::bind((Ipv4Addr::LOCALHOST, port)) {
        Ok(_listener) => DiagnosticCheck {
            name: "port_bind".to_string(),
            status: CheckStatus::Pass,
            message: format!("Port {port} is available on 127.0.0.1"),
            details: None,
        },
        Err(e) => DiagnosticCheck {
            name: "port_bind".to_string(),
            status: CheckStatus::Warning,
            message: format!("Port {port} cannot be bound on 127.0.0.1: {e}"),
            details: None,
        },
    }
}

fn format_table(report: &DiagnosticReport) -> String {
    let mut text = format!(
        "evalkit {} doctor: {} service (prefix {})\n\n",
        report.cli_version, report.service, report.prefix
    );
    for check in &report.checks {
        text.push_str(&format!(
            "[{}] {}: {}\n",
            check.status.label(),
            check.name,
            check.message
        ));
    }
    let failed = report.failed();
    if failed == 0 {
        text.push_str("\nNo problems found.\n");
    } else {
        text.push_str(&format!("\n{failed} check(s) failed.\n"));
    }
    text
}
