//! Settings structs, one per `[section]` of config.ini.

use std::path::PathBuf;

use crate::scale::Coarseness;

/// Complete user configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub output: OutputSettings,
    pub zone: ZoneSettings,
    pub logging: LoggingSettings,
}

/// Where generated documents go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Base directory for relative output paths. `None` means the current
    /// directory.
    pub directory: Option<PathBuf>,
}

/// Defaults for the `zone` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSettings {
    pub tile_coarseness: Coarseness,
    pub zone_coarseness: Coarseness,
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file, truncated at the start of every run
    pub file: PathBuf,
    /// Log at debug level unless `RUST_LOG` says otherwise
    pub verbose: bool,
}
