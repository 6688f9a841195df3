//! Parameter and hole validation.
//!
//! Validation turns a [`ZoneSpec`] or [`MystSpec`] into a plan the
//! generators can write without further checks: coarseness levels agree,
//! holes are resolved to canonical anchors and none repeat. Zone holes must
//! lie inside the zone; Myst holes may sit anywhere on the pairing lattice.
//! The checks run in a fixed order and the first failure is returned.

use std::collections::HashSet;
use std::fmt;

use crate::coord::ExactCoordinate;
use crate::error::{GenerateError, GenerateResult};
use crate::geojson::Properties;
use crate::hole::{HoleResolver, HoleSpec};
use crate::myst::MystSpec;
use crate::scale::Coarseness;
use crate::zone::ZoneSpec;

/// Non-fatal notice attached to a generation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// The document will hold an unusually large number of features.
    LargeOutput {
        tile: Coarseness,
        zone: Coarseness,
        features: u64,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::LargeOutput {
                tile,
                zone,
                features,
            } => write!(
                f,
                "{} tiles in a {} zone produce {} features; expect a large file",
                tile, zone, features
            ),
        }
    }
}

/// A validated Zone, ready to be written.
#[derive(Debug, Clone)]
pub struct ZonePlan {
    /// Origin rescaled to the tile scale
    pub origin: ExactCoordinate,
    /// Upper-right corner, exclusive
    pub end: ExactCoordinate,
    pub tile: Coarseness,
    pub zone: Coarseness,
    /// Tiles per side
    pub grid_width: i64,
    pub properties: Properties,
    /// Resolved hole anchors in supply order
    pub holes: Vec<ExactCoordinate>,
    pub advisories: Vec<Advisory>,
}

impl ZonePlan {
    /// Total number of features the zone will contain.
    pub fn feature_count(&self) -> u64 {
        (self.grid_width as u64).pow(2)
    }
}

/// A validated Myst, ready to be written.
#[derive(Debug, Clone)]
pub struct MystPlan {
    /// Side of each hole square; `None` only when there are no holes.
    pub zone: Option<Coarseness>,
    pub properties: Properties,
    /// Resolved hole anchors in supply order
    pub holes: Vec<ExactCoordinate>,
}

/// Validate a Zone and resolve its holes.
pub fn validate_zone(spec: &ZoneSpec) -> GenerateResult<ZonePlan> {
    let (tile, zone) = (spec.tile(), spec.zone());
    if tile > zone {
        return Err(GenerateError::Parameter(format!(
            "tile coarseness {} is coarser than zone coarseness {}",
            tile, zone
        )));
    }
    let origin = spec.origin().fit_to(tile)?;

    let resolver = HoleResolver::for_zone(origin, tile, zone)?;
    let holes = resolver.resolve_all(spec.holes())?;
    reject_duplicates(&holes)?;

    let end = origin.offset(zone.value(), zone.value())?;
    for anchor in &holes {
        let inside = origin.lon <= anchor.lon
            && anchor.lon < end.lon
            && origin.lat <= anchor.lat
            && anchor.lat < end.lat;
        if !inside {
            return Err(GenerateError::OutOfBoundsHole {
                anchor: *anchor,
                bounds: format!("zone [{}, {})", origin, end),
            });
        }
    }

    let grid_width = resolver.grid_width().unwrap_or(1);
    let mut advisories = Vec::new();
    if tile == Coarseness::Fine && zone >= Coarseness::SuperCoarse {
        advisories.push(Advisory::LargeOutput {
            tile,
            zone,
            features: (grid_width as u64).pow(2),
        });
    }

    Ok(ZonePlan {
        origin,
        end,
        tile,
        zone,
        grid_width,
        properties: spec.properties().clone(),
        holes,
        advisories,
    })
}

/// Validate a Myst and resolve its holes.
pub fn validate_myst(spec: &MystSpec) -> GenerateResult<MystPlan> {
    let zone = match (spec.zone(), has_holes(spec.holes())) {
        (None, false) => {
            return Ok(MystPlan {
                zone: None,
                properties: spec.properties().clone(),
                holes: Vec::new(),
            })
        }
        (Some(zone), true) => zone,
        (None, true) => {
            return Err(GenerateError::Parameter(
                "holes require a zone coarseness".to_string(),
            ))
        }
        (Some(zone), false) => {
            return Err(GenerateError::Parameter(format!(
                "zone coarseness {} given without any holes",
                zone
            )))
        }
    };

    // Resolution fits every anchor to the zone scale, so a hole finer than
    // the zone has already failed with ScaleMismatch here.
    let holes = HoleResolver::for_myst(zone).resolve_all(spec.holes())?;
    reject_duplicates(&holes)?;

    let side = zone.value();
    for anchor in &holes {
        anchor.offset(side, side)?;
    }

    Ok(MystPlan {
        zone: Some(zone),
        properties: spec.properties().clone(),
        holes,
    })
}

fn reject_duplicates(anchors: &[ExactCoordinate]) -> GenerateResult<()> {
    let mut seen = HashSet::with_capacity(anchors.len());
    for anchor in anchors {
        if !seen.insert(*anchor) {
            return Err(GenerateError::DuplicateHole(*anchor));
        }
    }
    Ok(())
}

/// True if any entry would contribute at least one hole.
pub fn has_holes(holes: &[HoleSpec]) -> bool {
    holes.iter().any(|hole| !hole.is_empty())
}
