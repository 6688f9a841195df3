//! Default values and the `ConfigFile::default()` implementation.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::scale::Coarseness;

/// Default tile side for the `zone` command.
pub const DEFAULT_TILE_COARSENESS: Coarseness = Coarseness::Medium;

/// Default zone side for the `zone` command.
pub const DEFAULT_ZONE_COARSENESS: Coarseness = Coarseness::Coarse;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "mystmap.log";

/// Default log file path (~/.mystmap/mystmap.log).
pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            output: OutputSettings { directory: None },
            zone: ZoneSettings {
                tile_coarseness: DEFAULT_TILE_COARSENESS,
                zone_coarseness: DEFAULT_ZONE_COARSENESS,
            },
            logging: LoggingSettings {
                file: default_log_file(),
                verbose: false,
            },
        }
    }
}
