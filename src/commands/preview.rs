//! `gradescale preview` command

use crate::cli::{OutputFormat, PairArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_preview_human, print_preview_records};
use gradescale_core::error::Result;

/// Execute the preview command
pub fn execute(ctx: &CommandContext, args: &PairArgs) -> Result<()> {
    let loaded = ctx.load_engine()?;
    let preview = loaded.engine.conversion_preview(&args.from, &args.to)?;

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&preview)?),
        OutputFormat::Human => print_preview_human(&loaded.engine, &preview),
        OutputFormat::Records => print_preview_records(&preview),
    }

    Ok(())
}
