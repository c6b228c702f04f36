//! `gradescale systems` command - list the registry snapshot

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_systems_human, print_systems_records};
use gradescale_core::error::Result;

/// Execute the systems command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let loaded = ctx.load_engine()?;
    let systems = loaded.engine.systems();

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(systems)?),
        OutputFormat::Human => print_systems_human(systems),
        OutputFormat::Records => print_systems_records(systems),
    }

    Ok(())
}
