//! Error types for Zone and Myst generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::coord::ExactCoordinate;
use crate::decimal::ParseDecimalError;
use crate::scale::Coarseness;

/// Errors that abort a generation call.
///
/// Every variant is fatal for the current document. When an error is returned
/// after the sink was opened, the file on disk must be treated as unusable.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The output path cannot be created or written.
    #[error("Invalid output path {path}: {reason}")]
    Path { path: PathBuf, reason: String },

    /// Malformed parameter, duplicate single-assignment field or missing field.
    #[error("Invalid parameter: {0}")]
    Parameter(String),

    /// Text that should hold a number or coordinate could not be parsed.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A value carries more fractional digits than the governing coarseness.
    #[error("{value} has more precision than {coarseness} ({scale} fractional digits) allows")]
    ScaleMismatch {
        value: String,
        coarseness: Coarseness,
        scale: u32,
    },

    /// A value is not one of the supported coarseness magnitudes.
    #[error("{0} is not a supported coarseness (expected 1, 0.1, 0.01, 0.001 or 0.0001)")]
    InvalidScale(String),

    /// A raster hole index falls outside the zone grid.
    #[error("Hole index {index} is outside the grid (valid range 0..={max})")]
    IndexOutOfBounds { index: i64, max: i64 },

    /// A paired hole index is not a natural number.
    #[error("Hole index {0} is not a natural number (must be >= 1)")]
    InvalidIndex(i64),

    /// A hole list contains an element of a type that cannot describe a hole.
    #[error("Unsupported hole element: {0}")]
    UnsupportedElement(String),

    /// Two hole specifications resolve to the same anchor.
    #[error("Duplicate hole at {0}")]
    DuplicateHole(ExactCoordinate),

    /// A Zone hole anchor lies outside the zone.
    #[error("Hole at {anchor} lies outside {bounds}")]
    OutOfBoundsHole {
        anchor: ExactCoordinate,
        bounds: String,
    },

    /// Streaming the document to the sink failed.
    #[error("I/O failure while writing GeoJSON: {0}")]
    Io(#[from] io::Error),
}

impl From<ParseDecimalError> for GenerateError {
    fn from(e: ParseDecimalError) -> Self {
        GenerateError::InvalidFormat(e.to_string())
    }
}

/// Result alias for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
