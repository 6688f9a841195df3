//! Interfaces the generation handlers depend on.
//!
//! Handlers never touch the console, the filesystem or the generator
//! directly, so they can be tested with the mocks in `tests.rs`.

use std::path::Path;

use mystmap::config::ConfigFile;
use mystmap::generator::GenerationReport;
use mystmap::hole::HoleSpec;
use mystmap::myst::MystSpec;
use mystmap::zone::ZoneSpec;

use crate::error::CliError;

/// Console output.
pub trait Output: Send + Sync {
    /// Print a line of text.
    fn println(&self, message: &str);

    /// Print an empty line.
    fn newline(&self) {
        self.println("");
    }

    /// Print an indented line.
    fn indented(&self, message: &str) {
        self.println(&format!("  {}", message));
    }
}

/// Document generation and the file access it needs.
pub trait GeneratorService: Send + Sync {
    /// Read a JSON array of holes.
    fn read_holes_file(&self, path: &Path) -> Result<Vec<HoleSpec>, CliError>;

    /// Generate a Zone file.
    fn generate_zone(&self, spec: &ZoneSpec) -> Result<GenerationReport, CliError>;

    /// Generate a Myst file.
    fn generate_myst(&self, spec: &MystSpec) -> Result<GenerationReport, CliError>;
}

/// Dependencies handed to every handler.
pub struct CommandContext<'a> {
    pub output: &'a dyn Output,
    pub generator: &'a dyn GeneratorService,
    /// Loaded user configuration, for defaults
    pub config: &'a ConfigFile,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        output: &'a dyn Output,
        generator: &'a dyn GeneratorService,
        config: &'a ConfigFile,
    ) -> Self {
        Self {
            output,
            generator,
            config,
        }
    }
}

/// A command with typed arguments.
pub trait CommandHandler {
    type Args;

    fn execute(args: Self::Args, ctx: &CommandContext<'_>) -> Result<(), CliError>;
}
