//! Production implementations of the handler interfaces.

use std::path::Path;
use std::sync::Arc;

use mystmap::generator::{GenerationReport, Generator};
use mystmap::hole::{read_holes_file, HoleSpec};
use mystmap::log::Logger;
use mystmap::myst::MystSpec;
use mystmap::zone::ZoneSpec;

use super::traits::{GeneratorService, Output};
use crate::error::CliError;

/// Writes to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn println(&self, message: &str) {
        println!("{}", message);
    }
}

/// Generates documents with [`mystmap::generator::Generator`].
pub struct DefaultGeneratorService {
    generator: Generator,
}

impl DefaultGeneratorService {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            generator: Generator::new(logger),
        }
    }
}

impl GeneratorService for DefaultGeneratorService {
    fn read_holes_file(&self, path: &Path) -> Result<Vec<HoleSpec>, CliError> {
        Ok(read_holes_file(path)?)
    }

    fn generate_zone(&self, spec: &ZoneSpec) -> Result<GenerationReport, CliError> {
        Ok(self.generator.generate_zone(spec)?)
    }

    fn generate_myst(&self, spec: &MystSpec) -> Result<GenerationReport, CliError> {
        Ok(self.generator.generate_myst(spec)?)
    }
}
