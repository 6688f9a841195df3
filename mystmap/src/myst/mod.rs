//! Myst documents: the whole world with square holes.
//!
//! A Myst is a single `MultiPolygon` feature whose outer ring is the world
//! boundary. Each hole adds an inner ring the size of one zone, so a Myst
//! masks everything except the zones it references.

mod generator;
mod spec;

pub use generator::{hole_ring, world_ring, MystGenerator};
pub use spec::{MystSpec, MystSpecBuilder};
