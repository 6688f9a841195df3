//! GeoJSON document output.
//!
//! [`GeoJsonWriter`] streams a `FeatureCollection` with exact decimal
//! coordinates, compact separators and a fixed key order, so generating the
//! same document twice yields identical bytes.

mod property;
mod writer;

pub use property::{Properties, PropertyValue};
pub use writer::{Feature, GeoJsonWriter, Geometry};
