//! CLI error handling with user-friendly messages.
//!
//! Centralizes error reporting for the CLI so every command prints failures
//! the same way and exits with the same codes.

use std::fmt;
use std::process;

use mystmap::config::ConfigFileError;
use mystmap::error::GenerateError;

/// CLI errors.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file or key problem
    Config(String),
    /// Invalid command-line input caught before generation
    Usage(String),
    /// Generation failed
    Generate(GenerateError),
}

impl CliError {
    /// Process exit code: 2 for input the user must correct, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Generate(e) if is_input_error(e) => 2,
            _ => 1,
        }
    }

    /// Print the error, any hint for fixing it, and exit.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Generate(GenerateError::ScaleMismatch { coarseness, .. }) => {
                eprintln!();
                eprintln!(
                    "Values must not have more fractional digits than {} ({}).",
                    coarseness,
                    coarseness.value()
                );
                eprintln!("Round the value or choose a finer coarseness.");
            }
            CliError::Generate(GenerateError::InvalidScale(_)) => {
                eprintln!();
                eprintln!("Supported levels:");
                eprintln!("  super_duper_coarse (1), super_coarse (0.1), coarse (0.01),");
                eprintln!("  medium (0.001), fine (0.0001)");
            }
            CliError::Generate(GenerateError::IndexOutOfBounds { .. }) => {
                eprintln!();
                eprintln!("Tile ids count from 0 at the origin, row by row.");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Use 'mystmap config list' to see the current settings.");
            }
            _ => {}
        }

        process::exit(self.exit_code())
    }
}

fn is_input_error(e: &GenerateError) -> bool {
    !matches!(e, GenerateError::Io(_) | GenerateError::Path { .. })
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::Generate(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Generate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GenerateError> for CliError {
    fn from(e: GenerateError) -> Self {
        CliError::Generate(e)
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}
