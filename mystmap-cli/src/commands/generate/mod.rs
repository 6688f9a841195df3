//! `zone` and `myst` commands.
//!
//! Built on the command handler pattern:
//!
//! - `traits`: interfaces (`Output`, `GeneratorService`, `CommandHandler`)
//! - `services`: console and library-backed implementations
//! - `args`: clap argument types
//! - `handlers`: turn arguments into a spec, generate, report
//!
//! Handlers only see the interfaces through a [`CommandContext`], so tests
//! drive them with mocks.

mod args;
mod handlers;
mod services;
mod traits;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use mystmap::log::TracingLogger;

pub use args::{MystArgs, ZoneArgs};
pub use handlers::{MystHandler, ZoneHandler};
pub use services::{ConsoleOutput, DefaultGeneratorService};
pub use traits::{CommandContext, CommandHandler};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Which document to generate.
#[derive(Debug)]
pub enum GenerateCommand {
    Zone(ZoneArgs),
    Myst(MystArgs),
}

/// Run a generation command with production services.
pub fn run(command: GenerateCommand, runner: &CliRunner) -> Result<(), CliError> {
    let output = ConsoleOutput::new();
    let generator = DefaultGeneratorService::new(Arc::new(TracingLogger::new()));
    let ctx = CommandContext::new(&output, &generator, runner.config());

    match command {
        GenerateCommand::Zone(args) => ZoneHandler::execute(args, &ctx),
        GenerateCommand::Myst(args) => MystHandler::execute(args, &ctx),
    }
}
