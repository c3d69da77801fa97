//! Service identities for the multi-service application.
//!
//! Responsibilities:
//! - Name the services that share configuration (Token, Evaluation, Grading).
//! - Map each service to its key prefix, default listen port and dotenv file.
//!
//! Invariants:
//! - Prefixes are upper-case and end with `_`.
//! - `Service::default()` is the Evaluation System, matching `DEFAULT_PREFIX`.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_EVALUATION_PORT, DEFAULT_GRADING_PORT, DEFAULT_TOKEN_PORT, EVALUATION_PREFIX,
    GRADING_PREFIX, TOKEN_PREFIX,
};

/// A service whose configuration is resolved with its own key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// Token System.
    Token,
    /// Evaluation System.
    #[default]
    Evaluation,
    /// Grading System.
    Grading,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Token, Service::Evaluation, Service::Grading];

    /// Prefix checked before the shared key (e.g. `EVALUATION_`).
    pub const fn prefix(self) -> &'static str {
        match self {
            Service::Token => TOKEN_PREFIX,
            Service::Evaluation => EVALUATION_PREFIX,
            Service::Grading => GRADING_PREFIX,
        }
    }

    /// Listen port used when neither `<PREFIX>PORT` nor `PORT` is set.
    pub const fn default_port(self) -> u16 {
        match self {
            Service::Token => DEFAULT_TOKEN_PORT,
            Service::Evaluation => DEFAULT_EVALUATION_PORT,
            Service::Grading => DEFAULT_GRADING_PORT,
        }
    }

    /// Lower-case name used on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Service::Token => "token",
            Service::Evaluation => "evaluation",
            Service::Grading => "grading",
        }
    }

    /// Service-specific dotenv file name (e.g. `.env.grading`).
    pub fn dotenv_file_name(self) -> String {
        format!(".env.{}", self.as_str())
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token" => Ok(Service::Token),
            "evaluation" => Ok(Service::Evaluation),
            "grading" => Ok(Service::Grading),
            other => Err(format!(
                "unknown service '{other}' (expected token, evaluation or grading)"
            )),
        }
    }
}
