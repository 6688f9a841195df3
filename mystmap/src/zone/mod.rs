//! Zone documents: a square grid of tiles.
//!
//! A Zone covers `[origin, origin + zone)` on both axes with tiles of side
//! `tile`, giving `(zone / tile)^2` features. Each feature carries a numeric
//! id in row-major order, which is also how raster hole indices address
//! tiles.

mod generator;
mod spec;

pub use generator::{tile_ring, ZoneGenerator};
pub use spec::{ZoneSpec, ZoneSpecBuilder};

pub(crate) use spec::{assign_once, required};
