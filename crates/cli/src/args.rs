//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load `.env` sources (see `context` module).

use clap::{Parser, Subcommand};
use evalkit_config::Service;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "evalkit")]
#[command(about = "Inspect and validate service configuration from the environment and .env files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  evalkit check\n  evalkit --service grading check --require PORT\n  evalkit get DB_HOST --default localhost\n  evalkit --service token show -o json\n  evalkit --env-file deploy/.env.staging doctor\n"
)]
pub struct Cli {
    /// Service whose prefix and defaults apply (token, evaluation, grading)
    #[arg(short, long, global = true, env = "EVALKIT_SERVICE", default_value = "evaluation")]
    pub service: Service,

    /// Key prefix to use instead of the service prefix (e.g., STAGING_)
    #[arg(long, global = true, env = "EVALKIT_PREFIX")]
    pub prefix: Option<String>,

    /// Extra .env file checked before the default candidates (repeatable)
    #[arg(long = "env-file", global = true, value_name = "FILE")]
    pub env_files: Vec<PathBuf>,

    /// Use the process environment only and skip .env discovery
    #[arg(long, global = true)]
    pub no_dotenv: bool,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The prefix requested on the command line, ignoring blank values.
    pub fn prefix_override(&self) -> Option<&str> {
        self.prefix
            .as_deref()
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify that every required key is present
    Check {
        /// Key to require instead of the default set (repeatable)
        #[arg(short, long = "require", value_name = "KEY")]
        require: Vec<String>,
    },

    /// Print the resolved value of one key
    Get {
        /// Unprefixed key name (e.g., PORT)
        name: String,

        /// Value to print when neither key form is set
        #[arg(short, long)]
        default: Option<String>,

        /// Fail with exit code 2 when the key is absent
        #[arg(long, conflicts_with = "default")]
        required: bool,
    },

    /// Show every known setting with its origin (secrets redacted)
    Show,

    /// Run configuration diagnostics
    Doctor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "evalkit",
            "check",
            "--service",
            "grading",
            "--env-file",
            "a.env",
            "--env-file",
            "b.env",
            "--require",
            "PORT",
        ])
        .unwrap();

        assert_eq!(cli.service, Service::Grading);
        assert_eq!(
            cli.env_files,
            vec![PathBuf::from("a.env"), PathBuf::from("b.env")]
        );
        match cli.command {
            Commands::Check { require } => assert_eq!(require, vec!["PORT".to_string()]),
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_unknown_service_rejected() {
        assert!(Cli::try_parse_from(["evalkit", "--service", "billing", "show"]).is_err());
    }

    #[test]
    fn test_blank_prefix_ignored() {
        let cli = Cli::try_parse_from(["evalkit", "--prefix", "  ", "show"]).unwrap();
        assert_eq!(cli.prefix_override(), None);

        let cli = Cli::try_parse_from(["evalkit", "--prefix", "STAGING_", "show"]).unwrap();
        assert_eq!(cli.prefix_override(), Some("STAGING_"));
    }

    #[test]
    fn test_get_required_conflicts_with_default() {
        assert!(
            Cli::try_parse_from(["evalkit", "get", "PORT", "--required", "--default", "1"])
                .is_err()
        );
    }
}
