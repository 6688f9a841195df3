//! Supported grid coarseness levels.
//!
//! Zone tiles, zone extents and Myst hole squares all have side lengths that
//! are one of five powers of ten. [`Coarseness`] names those magnitudes and
//! converts between a level and its exact decimal value.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::decimal::ExactDecimal;
use crate::error::{GenerateError, GenerateResult};

/// Side-length magnitude of a grid cell, from 1 degree down to 0.0001.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coarseness {
    /// 1
    SuperDuperCoarse,
    /// 0.1
    SuperCoarse,
    /// 0.01
    Coarse,
    /// 0.001
    Medium,
    /// 0.0001
    Fine,
}

impl Coarseness {
    /// All levels, coarsest first.
    pub const ALL: [Coarseness; 5] = [
        Coarseness::SuperDuperCoarse,
        Coarseness::SuperCoarse,
        Coarseness::Coarse,
        Coarseness::Medium,
        Coarseness::Fine,
    ];

    /// Number of fractional digits in this level's value.
    pub fn scale(self) -> u32 {
        match self {
            Coarseness::SuperDuperCoarse => 0,
            Coarseness::SuperCoarse => 1,
            Coarseness::Coarse => 2,
            Coarseness::Medium => 3,
            Coarseness::Fine => 4,
        }
    }

    /// Exact side length of this level.
    pub fn value(self) -> ExactDecimal {
        ExactDecimal::new(1, self.scale())
    }

    /// Find the level whose value is exactly `value`.
    pub fn from_value(value: &ExactDecimal) -> GenerateResult<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.value() == *value)
            .ok_or_else(|| GenerateError::InvalidScale(value.to_string()))
    }

    /// Lowercase name used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Coarseness::SuperDuperCoarse => "super_duper_coarse",
            Coarseness::SuperCoarse => "super_coarse",
            Coarseness::Coarse => "coarse",
            Coarseness::Medium => "medium",
            Coarseness::Fine => "fine",
        }
    }
}

/// Ordered by side length: `SuperDuperCoarse` is the greatest.
impl Ord for Coarseness {
    fn cmp(&self, other: &Self) -> Ordering {
        other.scale().cmp(&self.scale())
    }
}

impl PartialOrd for Coarseness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coarseness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a level name (`medium`, `super-coarse`) or its value (`0.001`).
impl FromStr for Coarseness {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('-', "_");
        if let Some(level) = Self::ALL.into_iter().find(|level| level.name() == name) {
            return Ok(level);
        }
        let value: ExactDecimal = s
            .parse()
            .map_err(|_| GenerateError::InvalidScale(s.trim().to_string()))?;
        Self::from_value(&value)
    }
}
