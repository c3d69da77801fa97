//! evalkit - Inspect and validate service configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Capture the environment and merge `.env` sources into a snapshot.
//! - Run one command against that snapshot and exit with a structured code.
//!
//! Does NOT handle:
//! - Resolution rules or `.env` parsing (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr so stdout carries only command output.
//! - `.env` files never override variables already set in the process.

mod args;
mod commands;
mod context;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use context::ConfigContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to determine the working directory: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let ctx = ConfigContext::load(&cli, &base_dir);

    let exit_code = match run_command(cli, &ctx) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
