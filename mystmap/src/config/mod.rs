//! User configuration in ~/.mystmap/config.ini.
//!
//! ```ini
//! [output]
//! directory = ~/maps
//!
//! [zone]
//! tile_coarseness = medium
//! zone_coarseness = coarse
//!
//! [logging]
//! file = ~/.mystmap/mystmap.log
//! verbose = false
//! ```
//!
//! A missing file means defaults. Keys can be read and written one at a time
//! through [`ConfigKey`].

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    default_log_file, DEFAULT_LOG_FILE_NAME, DEFAULT_TILE_COARSENESS, DEFAULT_ZONE_COARSENESS,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{ConfigFile, LoggingSettings, OutputSettings, ZoneSettings};
