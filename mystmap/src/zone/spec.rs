//! Zone parameters and their set-once builder.

use std::path::{Path, PathBuf};

use crate::coord::ExactCoordinate;
use crate::error::{GenerateError, GenerateResult};
use crate::geojson::{Properties, PropertyValue};
use crate::hole::HoleSpec;
use crate::scale::Coarseness;

/// Store `value` in an empty slot, failing if the field was already set.
pub(crate) fn assign_once<T>(slot: &mut Option<T>, value: T, field: &str) -> GenerateResult<()> {
    if slot.is_some() {
        return Err(GenerateError::Parameter(format!("{} is already set", field)));
    }
    *slot = Some(value);
    Ok(())
}

/// Take a required field out of its slot.
pub(crate) fn required<T>(slot: Option<T>, field: &str) -> GenerateResult<T> {
    slot.ok_or_else(|| GenerateError::Parameter(format!("{} is required", field)))
}

/// A complete, not yet validated, description of one Zone document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSpec {
    path: PathBuf,
    origin: ExactCoordinate,
    tile: Coarseness,
    zone: Coarseness,
    properties: Properties,
    holes: Vec<HoleSpec>,
}

impl ZoneSpec {
    /// Start building a Zone.
    pub fn builder() -> ZoneSpecBuilder {
        ZoneSpecBuilder::default()
    }

    /// Output path as given, before the extension is applied.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lower-left corner of the zone.
    pub fn origin(&self) -> ExactCoordinate {
        self.origin
    }

    pub fn tile(&self) -> Coarseness {
        self.tile
    }

    pub fn zone(&self) -> Coarseness {
        self.zone
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Hole entries in the order they were supplied.
    pub fn holes(&self) -> &[HoleSpec] {
        &self.holes
    }
}

/// Builder for [`ZoneSpec`].
///
/// Every field may be assigned once; a second assignment fails with
/// [`GenerateError::Parameter`]. Holes accumulate instead. `path`, `origin`,
/// `tile` and `zone` are required.
///
/// ```
/// use mystmap::coord::ExactCoordinate;
/// use mystmap::scale::Coarseness;
/// use mystmap::zone::ZoneSpec;
///
/// # fn main() -> mystmap::error::GenerateResult<()> {
/// let spec = ZoneSpec::builder()
///     .path("out/grid")?
///     .origin(ExactCoordinate::parse("0", "0")?)?
///     .tile(Coarseness::Medium)?
///     .zone(Coarseness::Coarse)?
///     .hole(55i64.into())
///     .build()?;
/// assert_eq!(spec.holes().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZoneSpecBuilder {
    path: Option<PathBuf>,
    origin: Option<ExactCoordinate>,
    tile: Option<Coarseness>,
    zone: Option<Coarseness>,
    properties: Properties,
    holes: Vec<HoleSpec>,
}

impl ZoneSpecBuilder {
    /// Set the output path.
    pub fn path(mut self, path: impl Into<PathBuf>) -> GenerateResult<Self> {
        assign_once(&mut self.path, path.into(), "path")?;
        Ok(self)
    }

    /// Set the lower-left corner of the zone.
    pub fn origin(mut self, origin: ExactCoordinate) -> GenerateResult<Self> {
        assign_once(&mut self.origin, origin, "origin")?;
        Ok(self)
    }

    /// Set the tile side.
    pub fn tile(mut self, tile: Coarseness) -> GenerateResult<Self> {
        assign_once(&mut self.tile, tile, "tile coarseness")?;
        Ok(self)
    }

    /// Set the zone side.
    pub fn zone(mut self, zone: Coarseness) -> GenerateResult<Self> {
        assign_once(&mut self.zone, zone, "zone coarseness")?;
        Ok(self)
    }

    /// Assign a feature property.
    pub fn property(
        mut self,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> GenerateResult<Self> {
        self.properties.set(name, value)?;
        Ok(self)
    }

    /// Append a hole entry.
    pub fn hole(mut self, hole: HoleSpec) -> Self {
        self.holes.push(hole);
        self
    }

    /// Append several hole entries.
    pub fn holes(mut self, holes: impl IntoIterator<Item = HoleSpec>) -> Self {
        self.holes.extend(holes);
        self
    }

    /// Finish building. Fails if a required field is missing.
    pub fn build(self) -> GenerateResult<ZoneSpec> {
        Ok(ZoneSpec {
            path: required(self.path, "path")?,
            origin: required(self.origin, "origin")?,
            tile: required(self.tile, "tile coarseness")?,
            zone: required(self.zone, "zone coarseness")?,
            properties: self.properties,
            holes: self.holes,
        })
    }
}
