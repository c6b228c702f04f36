//! `gradescale convert` and `gradescale batch` commands

use tracing::debug;

use crate::cli::{BatchArgs, ConvertArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{
    print_conversions_human, print_conversions_json, print_conversions_records,
};
use gradescale_core::error::Result;

/// Execute the convert command
pub fn execute(ctx: &CommandContext, args: &ConvertArgs) -> Result<()> {
    let loaded = ctx.load_engine()?;
    let options = args.options.resolve(&loaded.defaults);
    debug!(?options, "convert_options");

    let result = loaded
        .engine
        .convert(args.value, &args.pair.from, &args.pair.to, &options)?;
    let results = std::slice::from_ref(&result);

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => print_conversions_human(&loaded.engine, results),
        OutputFormat::Records => print_conversions_records(&loaded.engine, "convert", results),
    }

    Ok(())
}

/// Execute the batch command
pub fn execute_batch(ctx: &CommandContext, args: &BatchArgs) -> Result<()> {
    let loaded = ctx.load_engine()?;
    let options = args.options.resolve(&loaded.defaults);
    debug!(?options, count = args.values.len(), "batch_options");

    let results =
        loaded
            .engine
            .convert_batch(&args.values, &args.pair.from, &args.pair.to, &options)?;

    match ctx.cli.format {
        OutputFormat::Json => print_conversions_json(&results)?,
        OutputFormat::Human => print_conversions_human(&loaded.engine, &results),
        OutputFormat::Records => print_conversions_records(&loaded.engine, "batch", &results),
    }

    Ok(())
}
