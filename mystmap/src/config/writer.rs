//! INI serialization: `ConfigFile` -> commented config.ini text.

use std::path::Path;

use super::settings::ConfigFile;

/// Render a `ConfigFile` as the commented INI text written to config.ini.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let directory = config
        .output
        .directory
        .as_deref()
        .map(path_to_string)
        .unwrap_or_default();

    format!(
        r#"[output]
; Directory that relative output paths are resolved against.
; Empty means the current working directory.
directory = {}

[zone]
; Defaults for `mystmap zone` when --tile / --zone are not given.
; Levels: fine (0.0001), medium (0.001), coarse (0.01),
;         super_coarse (0.1), super_duper_coarse (1)
tile_coarseness = {}
zone_coarseness = {}

[logging]
; Log file, cleared at the start of every run
file = {}
; Log debug messages (RUST_LOG overrides this)
verbose = {}
"#,
        directory,
        config.zone.tile_coarseness.name(),
        config.zone.zone_coarseness.name(),
        path_to_string(&config.logging.file),
        config.logging.verbose,
    )
}

/// Display a path, collapsing the home directory to `~`.
pub(super) fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
