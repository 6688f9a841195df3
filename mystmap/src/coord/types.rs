//! Coordinate type definitions

use std::fmt;

use crate::decimal::ExactDecimal;
use crate::error::{GenerateError, GenerateResult};
use crate::scale::Coarseness;

/// Western edge of the world.
pub const MIN_LON: ExactDecimal = ExactDecimal::from_int(-180);
/// Eastern edge of the world.
pub const MAX_LON: ExactDecimal = ExactDecimal::from_int(180);
/// Southern edge of the world.
pub const MIN_LAT: ExactDecimal = ExactDecimal::from_int(-90);
/// Northern edge of the world.
pub const MAX_LAT: ExactDecimal = ExactDecimal::from_int(90);

/// An exact (longitude, latitude) pair.
///
/// Equality and hashing are by value on both axes, so `(0.10, 1)` and
/// `(0.1, 1.000)` are the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExactCoordinate {
    /// East-west position in degrees
    pub lon: ExactDecimal,
    /// North-south position in degrees
    pub lat: ExactDecimal,
}

impl ExactCoordinate {
    /// Create a coordinate from its components.
    pub const fn new(lon: ExactDecimal, lat: ExactDecimal) -> Self {
        Self { lon, lat }
    }

    /// Parse both components from text.
    pub fn parse(lon: &str, lat: &str) -> GenerateResult<Self> {
        Ok(Self::new(lon.parse()?, lat.parse()?))
    }

    /// Largest significant scale of the two components.
    pub fn scale_of(&self) -> u32 {
        self.lon.scale_of().max(self.lat.scale_of())
    }

    /// Translate by `(dlon, dlat)`.
    ///
    /// Fails with [`GenerateError::InvalidFormat`] if a component leaves the
    /// representable range.
    pub fn offset(&self, dlon: ExactDecimal, dlat: ExactDecimal) -> GenerateResult<Self> {
        match (self.lon.checked_add(&dlon), self.lat.checked_add(&dlat)) {
            (Some(lon), Some(lat)) => Ok(Self::new(lon, lat)),
            _ => Err(GenerateError::InvalidFormat(format!(
                "{} moved by ({}, {}) is out of range",
                self, dlon, dlat
            ))),
        }
    }

    /// Check the coordinate against a coarseness and express it at that scale.
    ///
    /// Fails with [`GenerateError::ScaleMismatch`] if either component has
    /// more significant fractional digits than `coarseness` allows, and with
    /// [`GenerateError::InvalidFormat`] if it is too large to rescale.
    pub fn fit_to(&self, coarseness: Coarseness) -> GenerateResult<Self> {
        let scale = coarseness.scale();
        let fit = |value: ExactDecimal| {
            if value.scale_of() > scale {
                return Err(GenerateError::ScaleMismatch {
                    value: value.to_string(),
                    coarseness,
                    scale,
                });
            }
            value.with_scale(scale).ok_or_else(|| {
                GenerateError::InvalidFormat(format!("{} is out of range", value))
            })
        };
        Ok(Self::new(fit(self.lon)?, fit(self.lat)?))
    }
}

impl fmt::Display for ExactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}
