//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use gradescale_core::config::RegistryConfig;
use gradescale_core::engine::{ConversionEngine, ConversionOptions, DEFAULT_LOCALE};
use gradescale_core::error::{ExitCode, Result};
use gradescale_core::registry::SystemRegistry;
use gradescale_core::trace_time;

/// Engine plus the configured conversion defaults
pub struct LoadedEngine {
    pub engine: ConversionEngine,
    pub defaults: ConversionOptions,
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load the registry snapshot and build an engine over it
    pub fn load_engine(&self) -> Result<LoadedEngine> {
        let config = RegistryConfig::resolve(self.cli.config.as_deref())?;
        let registry = SystemRegistry::from_config(&config)?;

        let locale = self
            .cli
            .locale
            .clone()
            .or_else(|| config.locale.clone())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let engine = registry.engine().with_locale(locale);

        trace_time!(self.start, "load_engine", systems = registry.systems().len());

        Ok(LoadedEngine {
            engine,
            defaults: config.defaults,
        })
    }
}

/// Trait for commands that can be executed.
///
/// `Ok` carries the exit status of a command that ran to completion; `Err`
/// is reserved for failures that stopped it.
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<ExitCode> {
        println!("gradescale {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Convert and validate grades across notation systems.");
        println!();
        println!("Run `gradescale --help` for usage information.");
        Ok(ExitCode::Success)
    }
}
