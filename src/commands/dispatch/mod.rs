//! Command dispatch logic for gradescale

use std::time::Instant;

use crate::cli::Cli;
use gradescale_core::error::{ExitCode, Result};
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

/// Run the selected subcommand and return its exit status
pub fn run(cli: &Cli, start: Instant) -> Result<ExitCode> {
    let ctx = CommandContext::new(cli, start);

    let status = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }?;

    debug!(elapsed = ?start.elapsed(), ?status, "dispatch");
    Ok(status)
}
