//! Typed access to configuration values by `section.key` name.
//!
//! Backs `mystmap config get/set`. Each key knows its value specification,
//! so invalid values are rejected before the file is touched.

use std::str::FromStr;

use thiserror::Error;

use super::parser::{expand_tilde, parse_bool};
use super::settings::ConfigFile;
use super::writer::path_to_string;
use crate::scale::Coarseness;

/// Errors from getting or setting values by key.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    OutputDirectory,
    ZoneTileCoarseness,
    ZoneZoneCoarseness,
    LoggingFile,
    LoggingVerbose,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|key| key.name() == lower)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Canonical name, e.g. `zone.tile_coarseness`.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::OutputDirectory => "output.directory",
            ConfigKey::ZoneTileCoarseness => "zone.tile_coarseness",
            ConfigKey::ZoneZoneCoarseness => "zone.zone_coarseness",
            ConfigKey::LoggingFile => "logging.file",
            ConfigKey::LoggingVerbose => "logging.verbose",
        }
    }

    /// Section part of the name.
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Key part of the name.
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Current value as text.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::OutputDirectory => config
                .output
                .directory
                .as_deref()
                .map(path_to_string)
                .unwrap_or_default(),
            ConfigKey::ZoneTileCoarseness => config.zone.tile_coarseness.name().to_string(),
            ConfigKey::ZoneZoneCoarseness => config.zone.zone_coarseness.name().to_string(),
            ConfigKey::LoggingFile => path_to_string(&config.logging.file),
            ConfigKey::LoggingVerbose => config.logging.verbose.to_string(),
        }
    }

    /// Validate and store a value.
    ///
    /// Coarseness keys also check the pair stays consistent: the tile may
    /// never be coarser than the zone.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let value = value.trim();
        match self {
            ConfigKey::OutputDirectory => {
                config.output.directory = if value.is_empty() {
                    None
                } else {
                    Some(expand_tilde(value))
                };
            }
            ConfigKey::ZoneTileCoarseness => {
                let tile = self.coarseness(value)?;
                if tile > config.zone.zone_coarseness {
                    return Err(self.failed(format!(
                        "{} is coarser than zone.zone_coarseness ({})",
                        tile, config.zone.zone_coarseness
                    )));
                }
                config.zone.tile_coarseness = tile;
            }
            ConfigKey::ZoneZoneCoarseness => {
                let zone = self.coarseness(value)?;
                if zone < config.zone.tile_coarseness {
                    return Err(self.failed(format!(
                        "{} is finer than zone.tile_coarseness ({})",
                        zone, config.zone.tile_coarseness
                    )));
                }
                config.zone.zone_coarseness = zone;
            }
            ConfigKey::LoggingFile => {
                if value.is_empty() {
                    return Err(self.failed("must be a valid path".to_string()));
                }
                config.logging.file = expand_tilde(value);
            }
            ConfigKey::LoggingVerbose => {
                config.logging.verbose = parse_bool(value).ok_or_else(|| {
                    self.failed("must be true/false, yes/no, 1/0, or on/off".to_string())
                })?;
            }
        }
        Ok(())
    }

    /// All keys in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::OutputDirectory,
            ConfigKey::ZoneTileCoarseness,
            ConfigKey::ZoneZoneCoarseness,
            ConfigKey::LoggingFile,
            ConfigKey::LoggingVerbose,
        ]
    }

    fn coarseness(&self, value: &str) -> Result<Coarseness, ConfigKeyError> {
        value.parse().map_err(|_| {
            self.failed(
                "must be one of: fine, medium, coarse, super_coarse, super_duper_coarse"
                    .to_string(),
            )
        })
    }

    fn failed(&self, reason: String) -> ConfigKeyError {
        ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason,
        }
    }
}
