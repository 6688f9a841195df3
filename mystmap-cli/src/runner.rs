//! Setup shared by the generation commands.

use tracing::info;

use mystmap::config::ConfigFile;
use mystmap::logging::{init_logging, split_log_path, LoggingGuard};

use crate::error::CliError;

/// Loads the configuration and keeps logging active for the command's lifetime.
pub struct CliRunner {
    logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Load config.ini and start logging to the configured file.
    ///
    /// `verbose` turns on debug logging in addition to `[logging] verbose`.
    pub fn new(verbose: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;
        let verbose = verbose || config.logging.verbose;

        let (log_dir, log_file) = split_log_path(&config.logging.file)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;
        let logging_guard = init_logging(&log_dir, &log_file, verbose)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log the version and command being run.
    pub fn log_startup(&self, command: &str) {
        info!("mystmap v{}", mystmap::VERSION);
        info!("Running {} command, logging to {}", command, self.logging_guard.path().display());
    }
}
