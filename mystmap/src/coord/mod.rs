//! Exact geographic coordinates
//!
//! Provides [`ExactCoordinate`], the (lon, lat) pair every generated position
//! and hole anchor is expressed in, plus parsing of the delimited
//! `"lon,lat"` text form accepted for holes.

mod types;

#[cfg(test)]
mod tests;

pub use types::{ExactCoordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use crate::error::{GenerateError, GenerateResult};

/// Separators accepted between longitude and latitude, in lookup order.
pub const DELIMITERS: [char; 4] = [',', '/', '_', ' '];

/// Parses a coordinate written as `"lon,lat"`, `"lon lat"`, `"lon_lat"` or
/// `"lon/lat"`.
///
/// Whitespace around either component is ignored, so `"1.5, 2"` parses.
pub fn parse_delimited(text: &str) -> GenerateResult<ExactCoordinate> {
    let text = text.trim();
    let (lon, lat) = DELIMITERS
        .iter()
        .find_map(|&delimiter| text.split_once(delimiter))
        .ok_or_else(|| {
            GenerateError::InvalidFormat(format!(
                "'{}' is not a coordinate pair (expected lon,lat)",
                text
            ))
        })?;
    ExactCoordinate::parse(lon.trim(), lat.trim())
}
