//! `mystmap config get/set/list/path`.

use std::path::Path;

use clap::Subcommand;
use mystmap::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print a configuration value
    Get {
        /// Key in section.key form (e.g. zone.tile_coarseness)
        key: String,
    },

    /// Change a configuration value
    Set {
        /// Key in section.key form (e.g. zone.tile_coarseness)
        key: String,

        /// New value
        value: String,
    },

    /// Print every setting
    List,

    /// Print the configuration file path
    Path,
}

/// Run a config subcommand against the default config file.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    let path = config_file_path();
    for line in run_at(command, &path)? {
        println!("{}", line);
    }
    Ok(())
}

/// Run a config subcommand against `path` and return the lines to print.
pub fn run_at(command: ConfigCommands, path: &Path) -> Result<Vec<String>, CliError> {
    match command {
        ConfigCommands::Get { key } => {
            let key = parse_key(&key)?;
            let config = ConfigFile::load_from(path)?;
            Ok(vec![display_value(key.get(&config))])
        }
        ConfigCommands::Set { key, value } => {
            let key = parse_key(&key)?;
            let mut config = ConfigFile::load_from(path)?;
            key.set(&mut config, &value)
                .map_err(|e| CliError::Config(e.to_string()))?;
            config.save_to(path)?;
            Ok(vec![format!("Set {} = {}", key.name(), key.get(&config))])
        }
        ConfigCommands::List => {
            let config = ConfigFile::load_from(path)?;
            Ok(list_lines(&config))
        }
        ConfigCommands::Path => Ok(vec![path.display().to_string()]),
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'mystmap config list' to see available keys.",
            key
        ))
    })
}

fn display_value(value: String) -> String {
    if value.is_empty() {
        "(not set)".to_string()
    } else {
        value
    }
}

fn list_lines(config: &ConfigFile) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_section = "";
    for key in ConfigKey::all() {
        let section = key.section();
        if section != current_section {
            if !current_section.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("[{}]", section));
            current_section = section;
        }
        lines.push(format!(
            "  {} = {}",
            key.key_name(),
            display_value(key.get(config))
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn get(key: &str, path: &Path) -> Result<Vec<String>, CliError> {
        run_at(
            ConfigCommands::Get {
                key: key.to_string(),
            },
            path,
        )
    }

    #[test]
    fn test_get_default_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        assert_eq!(get("zone.tile_coarseness", &path).unwrap(), vec!["medium"]);
        assert_eq!(get("output.directory", &path).unwrap(), vec!["(not set)"]);
    }

    #[test]
    fn test_set_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        let lines = run_at(
            ConfigCommands::Set {
                key: "zone.zone_coarseness".to_string(),
                value: "0.1".to_string(),
            },
            &path,
        )
        .unwrap();
        assert_eq!(lines, vec!["Set zone.zone_coarseness = super_coarse"]);
        assert_eq!(
            get("zone.zone_coarseness", &path).unwrap(),
            vec!["super_coarse"]
        );
    }

    #[test]
    fn test_set_invalid_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        let result = run_at(
            ConfigCommands::Set {
                key: "logging.verbose".to_string(),
                value: "loud".to_string(),
            },
            &path,
        );
        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_unknown_key() {
        let dir = TempDir::new().unwrap();
        let result = get("zone.origin", &dir.path().join("config.ini"));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("zone.origin")));
    }

    #[test]
    fn test_list_groups_by_section() {
        let lines = list_lines(&ConfigFile::default());
        assert_eq!(lines[0], "[output]");
        assert!(lines.contains(&"[zone]".to_string()));
        assert!(lines.contains(&"  tile_coarseness = medium".to_string()));
        assert!(lines.contains(&"[logging]".to_string()));
    }

    #[test]
    fn test_path() {
        let path = Path::new("/etc/mystmap/config.ini");
        assert_eq!(
            run_at(ConfigCommands::Path, path).unwrap(),
            vec!["/etc/mystmap/config.ini"]
        );
    }
}
