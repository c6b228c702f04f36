//! Gradescale - grade conversion CLI
//!
//! Converts grades between notation systems (0-20, letters, competency
//! levels, custom school scales) and validates raw grades.
//!
//! Exit status comes from one of three places: clap for malformed
//! arguments, the command itself (`validate` reports an invalid grade as
//! `Failure` without raising), or the `GradeError` that stopped a command.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use gradescale_core::error::{ExitCode as GradeExitCode, GradeError};
use gradescale_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return reject_arguments(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(status) => exit_with(status),
        Err(e) => {
            report(&cli, &e);
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(status: GradeExitCode) -> ExitCode {
    ExitCode::from(status as u8)
}

/// Print an error that stopped a command, honouring `--format` and `--quiet`
fn report(cli: &Cli, error: &GradeError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }
}

/// Handle an argument error before `Cli` exists.
///
/// Help and version output, and every error outside JSON mode, keep clap's
/// own rendering. In JSON mode the error becomes a `usage_error` envelope.
fn reject_arguments(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || !json_requested(env::args().skip(1)) {
        err.exit();
    }

    let error = GradeError::UsageError(err.to_string().trim_end().to_string());
    eprintln!("{}", error.to_json());
    exit_with(error.exit_code())
}

/// Whether raw argv asks for JSON output (`--format json` or `--format=json`)
fn json_requested(args: impl IntoIterator<Item = String>) -> bool {
    let mut after_format_flag = false;
    for arg in args {
        if arg == "--format=json" || (after_format_flag && arg == "json") {
            return true;
        }
        after_format_flag = arg == "--format";
    }
    false
}
