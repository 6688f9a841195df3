//! INI parsing: `Ini` -> `ConfigFile`.
//!
//! The single place where INI key names are mapped to struct fields.

use std::path::PathBuf;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::scale::Coarseness;

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse an `Ini` into a `ConfigFile`, overlaying values on the defaults.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [output]
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            config.output.directory = if v.is_empty() {
                None
            } else {
                Some(expand_tilde(v))
            };
        }
    }

    // [zone]
    if let Some(section) = ini.section(Some("zone")) {
        for (key, slot) in [
            ("tile_coarseness", &mut config.zone.tile_coarseness),
            ("zone_coarseness", &mut config.zone.zone_coarseness),
        ] {
            if let Some(v) = section.get(key) {
                *slot = v.parse::<Coarseness>().map_err(|_| {
                    invalid(
                        "zone",
                        key,
                        v,
                        "must be one of: fine, medium, coarse, super_coarse, super_duper_coarse",
                    )
                })?;
            }
        }
        if config.zone.tile_coarseness > config.zone.zone_coarseness {
            return Err(invalid(
                "zone",
                "tile_coarseness",
                config.zone.tile_coarseness.name(),
                "must not be coarser than zone_coarseness",
            ));
        }
    }

    // [logging]
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("verbose") {
            config.logging.verbose = parse_bool(v)
                .ok_or_else(|| invalid("logging", "verbose", v, "must be true or false"))?;
        }
    }

    Ok(config)
}

/// Accepts true/false, yes/no, 1/0 and on/off.
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
