//! CLI argument parsing for gradescale
//!
//! Uses clap for argument parsing.
//! Supports global flags: --config, --format, --locale, --quiet, --verbose

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{BatchArgs, ConvertArgs, PairArgs, ValidateArgs};
pub use gradescale_core::format::OutputFormat;
use parse::parse_output_format;

/// Gradescale - convert and validate grades across notation systems
#[derive(Parser, Debug)]
#[command(name = "gradescale")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Registry config file (TOML, or YAML by extension)
    #[arg(long, global = true, env = "GRADESCALE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human, json or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Locale for display labels (e.g. "fr", "en-US")
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered notation systems
    Systems,

    /// Convert one grade between two systems
    Convert(ConvertArgs),

    /// Convert several grades, in order; stops at the first failure
    Batch(BatchArgs),

    /// Check whether a grade is legal in a system
    Validate(ValidateArgs),

    /// Show sample conversions across the source range
    Preview(PairArgs),
}
