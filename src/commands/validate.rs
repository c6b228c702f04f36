//! `gradescale validate` command

use crate::cli::{OutputFormat, ValidateArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{
    print_validation_human, print_validation_json, print_validation_records,
};
use gradescale_core::error::{ExitCode, Result};

/// Execute the validate command.
///
/// The outcome is data: it is printed in full and an invalid grade only
/// changes the exit status to `Failure`.
pub fn execute(ctx: &CommandContext, args: &ValidateArgs) -> Result<ExitCode> {
    let loaded = ctx.load_engine()?;
    let result = loaded.engine.validate_grade(args.value, &args.system);

    match ctx.cli.format {
        OutputFormat::Json => print_validation_json(args, &result)?,
        OutputFormat::Human => print_validation_human(&loaded.engine, args, &result),
        OutputFormat::Records => print_validation_records(args, &result),
    }

    Ok(if result.is_valid {
        ExitCode::Success
    } else {
        ExitCode::Failure
    })
}
