//! mystmap - exact-decimal GeoJSON grids and world masks
//!
//! Generates two kinds of GeoJSON documents from scale-based parameters:
//!
//! - a **Zone**: a square grid of tiles starting at an origin, with optional
//!   tiles punched out
//! - a **Myst**: one world-covering multipolygon with square holes, one per
//!   referenced zone
//!
//! All coordinates are exact decimals, so a tile edge at `0.001` is written
//! as `0.001` and adjacent tiles share edges exactly.
//!
//! # Example
//!
//! ```no_run
//! use mystmap::coord::ExactCoordinate;
//! use mystmap::generator::Generator;
//! use mystmap::hole::HoleSpec;
//! use mystmap::scale::Coarseness;
//! use mystmap::zone::ZoneSpec;
//!
//! # fn main() -> mystmap::error::GenerateResult<()> {
//! let spec = ZoneSpec::builder()
//!     .path("maps/grid")?
//!     .origin(ExactCoordinate::parse("12.34", "-5.67")?)?
//!     .tile(Coarseness::Medium)?
//!     .zone(Coarseness::Coarse)?
//!     .property("name", "harbour")?
//!     .hole(HoleSpec::SingleIndex(55))
//!     .build()?;
//!
//! let report = Generator::default().generate_zone(&spec)?;
//! println!("wrote {} features to {}", report.summary.features, report.path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod coord;
pub mod decimal;
pub mod error;
pub mod generator;
pub mod geojson;
pub mod hole;
pub mod log;
pub mod logging;
pub mod myst;
pub mod output;
pub mod scale;
pub mod validate;
pub mod zone;

/// Version of the mystmap library and CLI, from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
