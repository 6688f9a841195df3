//! Myst mask emission.

use std::io::Write;

use crate::coord::{ExactCoordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::decimal::ExactDecimal;
use crate::error::GenerateResult;
use crate::geojson::{Feature, GeoJsonWriter, Geometry};
use crate::validate::MystPlan;

/// World boundary, counter-clockwise from the south-west corner, through the
/// four corners and the midpoint of each edge, closed.
pub fn world_ring() -> Vec<ExactCoordinate> {
    let zero = ExactDecimal::ZERO;
    let sw = ExactCoordinate::new(MIN_LON, MIN_LAT);
    vec![
        sw,
        ExactCoordinate::new(zero, MIN_LAT),
        ExactCoordinate::new(MAX_LON, MIN_LAT),
        ExactCoordinate::new(MAX_LON, zero),
        ExactCoordinate::new(MAX_LON, MAX_LAT),
        ExactCoordinate::new(zero, MAX_LAT),
        ExactCoordinate::new(MIN_LON, MAX_LAT),
        ExactCoordinate::new(MIN_LON, zero),
        sw,
    ]
}

/// Closed, clockwise ring of the hole square whose lower-left corner is
/// `anchor`, starting at the lower-right corner.
pub fn hole_ring(
    anchor: ExactCoordinate,
    side: ExactDecimal,
) -> GenerateResult<Vec<ExactCoordinate>> {
    let zero = ExactDecimal::ZERO;
    let lower_right = anchor.offset(side, zero)?;
    Ok(vec![
        lower_right,
        anchor,
        anchor.offset(zero, side)?,
        anchor.offset(side, side)?,
        lower_right,
    ])
}

/// Writes the single world-covering feature of a validated Myst.
pub struct MystGenerator<'a> {
    plan: &'a MystPlan,
}

impl<'a> MystGenerator<'a> {
    pub fn new(plan: &'a MystPlan) -> Self {
        Self { plan }
    }

    /// Rings of the multipolygon: the world first, then one per hole in
    /// supply order.
    pub fn rings(&self) -> GenerateResult<Vec<Vec<ExactCoordinate>>> {
        let mut rings = Vec::with_capacity(self.plan.holes.len() + 1);
        rings.push(world_ring());
        if let Some(zone) = self.plan.zone {
            let side = zone.value();
            for &anchor in &self.plan.holes {
                rings.push(hole_ring(anchor, side)?);
            }
        }
        Ok(rings)
    }

    /// Stream the Myst and return the feature count (always 1).
    pub fn write<W: Write>(&self, sink: W) -> GenerateResult<u64> {
        let rings = self.rings()?;
        let mut writer = GeoJsonWriter::begin(sink)?;
        writer.write_feature(&Feature {
            id: None,
            geometry: Geometry::MultiPolygon(&rings),
            properties: &self.plan.properties,
        })?;
        let features = writer.features_written();
        writer.finish()?;
        Ok(features)
    }
}
