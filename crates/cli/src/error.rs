//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that startup scripts can use to distinguish failures.
//! - Map `ConfigError` and `CliError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 0 means every required key resolved.
//! - Exit code 2 is reserved for missing configuration.

use evalkit_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for evalkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Missing configuration - one or more required keys are absent.
    ///
    /// Scripts should stop the service start and report the missing names.
    MissingConfiguration = 2,

    /// Invalid configuration - a value is present but unusable.
    ///
    /// Scripts should fix the value and not retry.
    InvalidConfiguration = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingConfiguration { .. } => ExitCode::MissingConfiguration,
            ConfigError::InvalidValue { .. } => ExitCode::InvalidConfiguration,
            ConfigError::FileDiscoveryFailure { .. } => ExitCode::GeneralError,
        }
    }
}

/// Failures raised by CLI commands themselves.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Missing required configuration: {}", missing.join(", "))]
    MissingConfiguration { missing: Vec<String> },

    #[error("{failed} diagnostic check(s) failed")]
    DiagnosticsFailed { failed: usize },
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::MissingConfiguration { .. } => ExitCode::MissingConfiguration,
            CliError::DiagnosticsFailed { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
        }

        ExitCode::GeneralError
    }
}
