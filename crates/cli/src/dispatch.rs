//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Loading `.env` sources (see `context` module).
//!
//! Invariants:
//! - Every command resolves against the same snapshot built in `main()`.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::context::ConfigContext;

/// Dispatch CLI commands to their respective handlers.
///
/// # Arguments
/// * `cli` - The parsed CLI arguments
/// * `ctx` - The configuration context built from the environment and `.env` sources
pub(crate) fn run_command(cli: Cli, ctx: &ConfigContext) -> Result<()> {
    match cli.command {
        Commands::Check { require } => commands::check::run(ctx, require, &cli.output),
        Commands::Get {
            name,
            default,
            required,
        } => commands::get::run(ctx, &name, default.as_deref(), required, &cli.output),
        Commands::Show => commands::show::run(ctx, &cli.output),
        Commands::Doctor => commands::doctor::run(ctx, &cli.output),
    }
}
