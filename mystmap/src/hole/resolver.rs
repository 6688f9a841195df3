//! Resolution of hole specifications to canonical anchors.

use super::pairing::anchor_for_index;
use super::HoleSpec;
use crate::coord::{parse_delimited, ExactCoordinate};
use crate::error::{GenerateError, GenerateResult};
use crate::scale::Coarseness;

/// The generation a hole belongs to, which decides how indices are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleContext {
    /// Zone holes: indices are row-major tile ids from the origin.
    Zone {
        /// Lower-left corner of the zone
        origin: ExactCoordinate,
        /// Side of one tile
        tile: Coarseness,
        /// Side of the whole zone
        zone: Coarseness,
    },
    /// Myst holes: indices are Cantor pairing indices on a 0.1 degree lattice.
    Myst {
        /// Side of each excluded square
        zone: Coarseness,
    },
}

/// Turns [`HoleSpec`] entries into anchors for one generation.
#[derive(Debug, Clone)]
pub struct HoleResolver {
    context: HoleContext,
    /// Tiles per zone side; only meaningful for Zone contexts.
    grid_width: i64,
}

impl HoleResolver {
    /// Create a resolver for holes in a Zone.
    ///
    /// Fails with [`GenerateError::InvalidFormat`] if the zone side is not a
    /// whole number of tiles.
    pub fn for_zone(
        origin: ExactCoordinate,
        tile: Coarseness,
        zone: Coarseness,
    ) -> GenerateResult<Self> {
        let grid_width = zone.value().ratio(&tile.value()).ok_or_else(|| {
            GenerateError::InvalidFormat(format!(
                "zone coarseness {} is not a whole multiple of tile coarseness {}",
                zone, tile
            ))
        })?;
        Ok(Self {
            context: HoleContext::Zone { origin, tile, zone },
            grid_width,
        })
    }

    /// Create a resolver for holes in a Myst.
    pub fn for_myst(zone: Coarseness) -> Self {
        Self {
            context: HoleContext::Myst { zone },
            grid_width: 0,
        }
    }

    /// The context this resolver was built for.
    pub fn context(&self) -> HoleContext {
        self.context
    }

    /// The coarseness coordinate holes must fit: tile for Zones, zone for Mysts.
    pub fn governing(&self) -> Coarseness {
        match self.context {
            HoleContext::Zone { tile, .. } => tile,
            HoleContext::Myst { zone } => zone,
        }
    }

    /// Tiles per zone side, for Zone resolvers.
    pub fn grid_width(&self) -> Option<i64> {
        match self.context {
            HoleContext::Zone { .. } => Some(self.grid_width),
            HoleContext::Myst { .. } => None,
        }
    }

    /// Resolve a single entry. An entry may yield zero, one or many anchors.
    pub fn resolve(&self, spec: &HoleSpec) -> GenerateResult<Vec<ExactCoordinate>> {
        match spec {
            HoleSpec::None => Ok(Vec::new()),
            HoleSpec::SingleCoordinate(anchor) => Ok(vec![self.coordinate(anchor)?]),
            HoleSpec::CoordinateList(anchors) => {
                anchors.iter().map(|anchor| self.coordinate(anchor)).collect()
            }
            HoleSpec::DelimitedString(text) => Ok(vec![self.coordinate(&parse_delimited(text)?)?]),
            HoleSpec::SingleIndex(index) => Ok(vec![self.index(*index)?]),
            HoleSpec::IndexList(indices) => indices.iter().map(|&index| self.index(index)).collect(),
        }
    }

    /// Resolve every entry, keeping supply order. Duplicates are kept so the
    /// validator can report them.
    pub fn resolve_all(&self, specs: &[HoleSpec]) -> GenerateResult<Vec<ExactCoordinate>> {
        let mut anchors = Vec::new();
        for spec in specs {
            anchors.extend(self.resolve(spec)?);
        }
        Ok(anchors)
    }

    fn coordinate(&self, anchor: &ExactCoordinate) -> GenerateResult<ExactCoordinate> {
        anchor.fit_to(self.governing())
    }

    fn index(&self, index: i64) -> GenerateResult<ExactCoordinate> {
        match self.context {
            HoleContext::Zone { origin, tile, .. } => {
                let max = self.grid_width * self.grid_width - 1;
                if !(0..=max).contains(&index) {
                    return Err(GenerateError::IndexOutOfBounds { index, max });
                }
                let x = index % self.grid_width;
                let y = index / self.grid_width;
                let step = tile.value();
                let scaled = |n: i64| {
                    step.checked_mul_int(n).ok_or_else(|| {
                        GenerateError::InvalidFormat(format!(
                            "{} tiles of {} is out of range",
                            n, tile
                        ))
                    })
                };
                origin.offset(scaled(x)?, scaled(y)?)?.fit_to(tile)
            }
            HoleContext::Myst { zone } => anchor_for_index(index)?.fit_to(zone),
        }
    }
}
