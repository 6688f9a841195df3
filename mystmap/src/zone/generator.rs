//! Zone grid emission.

use std::collections::HashSet;
use std::io::Write;

use crate::coord::ExactCoordinate;
use crate::decimal::ExactDecimal;
use crate::error::GenerateResult;
use crate::geojson::{Feature, GeoJsonWriter, Geometry};
use crate::validate::ZonePlan;

/// Closed ring of the tile whose lower-left corner is `anchor`, starting at
/// the lower-right corner and running counter-clockwise.
pub fn tile_ring(
    anchor: ExactCoordinate,
    side: ExactDecimal,
) -> GenerateResult<[ExactCoordinate; 5]> {
    let zero = ExactDecimal::ZERO;
    let lower_right = anchor.offset(side, zero)?;
    Ok([
        lower_right,
        anchor.offset(side, side)?,
        anchor.offset(zero, side)?,
        anchor,
        lower_right,
    ])
}

/// Writes one feature per tile of a validated zone.
pub struct ZoneGenerator<'a> {
    plan: &'a ZonePlan,
}

impl<'a> ZoneGenerator<'a> {
    pub fn new(plan: &'a ZonePlan) -> Self {
        Self { plan }
    }

    /// Stream the zone as a FeatureCollection and return the feature count.
    ///
    /// Rows run from the origin latitude upward, tiles within a row from the
    /// origin longitude eastward. Ids count from 0 in that order. A tile
    /// whose lower-left corner is a hole keeps its id and properties but has
    /// no coordinates.
    pub fn write<W: Write>(&self, sink: W) -> GenerateResult<u64> {
        let plan = self.plan;
        let side = plan.tile.value();
        let end = plan.end;
        let holes: HashSet<ExactCoordinate> = plan.holes.iter().copied().collect();

        let mut writer = GeoJsonWriter::begin(sink)?;
        let mut id = 0u64;
        let mut lat = plan.origin.lat;
        while lat < end.lat {
            let mut lon = plan.origin.lon;
            let mut row_top = lat;
            while lon < end.lon {
                let anchor = ExactCoordinate::new(lon, lat);
                let ring = tile_ring(anchor, side)?;
                let geometry = if holes.contains(&anchor) {
                    Geometry::EmptyPolygon
                } else {
                    Geometry::Polygon(&ring)
                };
                writer.write_feature(&Feature {
                    id: Some(id),
                    geometry,
                    properties: &plan.properties,
                })?;
                id += 1;
                // The next tile starts at this one's lower-right corner.
                lon = ring[0].lon;
                row_top = ring[1].lat;
            }
            lat = row_top;
        }
        let features = writer.features_written();
        writer.finish()?;
        Ok(features)
    }
}
