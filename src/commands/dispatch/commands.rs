//! Command implementations for all gradescale commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{convert, preview, systems, validate};
use gradescale_core::error::{ExitCode, Result};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode> {
        let completed = match self {
            Commands::Validate(args) => return validate::execute(ctx, args),
            Commands::Systems => systems::execute(ctx),
            Commands::Convert(args) => convert::execute(ctx, args),
            Commands::Batch(args) => convert::execute_batch(ctx, args),
            Commands::Preview(args) => preview::execute(ctx, args),
        };
        completed.map(|()| ExitCode::Success)
    }
}
