//! Output file handling.
//!
//! Paths are checked before any validation of the document itself, and the
//! file is only created once the document is known to be valid. Existing
//! files are overwritten.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{GenerateError, GenerateResult};

/// Extension every generated document carries.
pub const EXTENSION: &str = "geojson";

fn path_error(path: &Path, reason: impl Into<String>) -> GenerateError {
    GenerateError::Path {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Apply the `.geojson` extension and check that the path can name a file.
///
/// The extension is appended, not substituted: `out/grid.json` becomes
/// `out/grid.json.geojson`. Nothing is created on disk.
pub fn resolve_path(path: &Path) -> GenerateResult<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(path_error(path, "path is empty"));
    }
    if path.file_name().is_none() {
        return Err(path_error(path, "path does not name a file"));
    }

    let has_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXTENSION));
    let resolved = if has_extension {
        path.to_path_buf()
    } else {
        let mut name = OsString::from(path.as_os_str());
        name.push(".");
        name.push(EXTENSION);
        PathBuf::from(name)
    };

    if resolved.is_dir() {
        return Err(path_error(&resolved, "path is a directory"));
    }
    if let Some(existing) = resolved.ancestors().skip(1).find(|p| p.exists()) {
        if !existing.is_dir() {
            return Err(path_error(
                &resolved,
                format!("{} is not a directory", existing.display()),
            ));
        }
    }
    Ok(resolved)
}

/// Create parent directories and open the file for writing.
pub fn open_sink(path: &Path) -> GenerateResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| path_error(path, format!("cannot create {}: {}", parent.display(), e)))?;
    }
    let file = File::create(path).map_err(|e| path_error(path, e.to_string()))?;
    Ok(BufWriter::new(file))
}
