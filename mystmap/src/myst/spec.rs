//! Myst parameters and their set-once builder.

use std::path::{Path, PathBuf};

use crate::error::GenerateResult;
use crate::geojson::{Properties, PropertyValue};
use crate::hole::HoleSpec;
use crate::scale::Coarseness;
use crate::zone::{assign_once, required};

/// A complete, not yet validated, description of one Myst document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MystSpec {
    path: PathBuf,
    zone: Option<Coarseness>,
    properties: Properties,
    holes: Vec<HoleSpec>,
}

impl MystSpec {
    /// Start building a Myst.
    pub fn builder() -> MystSpecBuilder {
        MystSpecBuilder::default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Side of each hole square, if holes are used.
    pub fn zone(&self) -> Option<Coarseness> {
        self.zone
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn holes(&self) -> &[HoleSpec] {
        &self.holes
    }
}

/// Builder for [`MystSpec`]. Only `path` is required.
#[derive(Debug, Clone, Default)]
pub struct MystSpecBuilder {
    path: Option<PathBuf>,
    zone: Option<Coarseness>,
    properties: Properties,
    holes: Vec<HoleSpec>,
}

impl MystSpecBuilder {
    pub fn path(mut self, path: impl Into<PathBuf>) -> GenerateResult<Self> {
        assign_once(&mut self.path, path.into(), "path")?;
        Ok(self)
    }

    /// Set the side of the squares holes punch out.
    pub fn zone(mut self, zone: Coarseness) -> GenerateResult<Self> {
        assign_once(&mut self.zone, zone, "zone coarseness")?;
        Ok(self)
    }

    pub fn property(
        mut self,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> GenerateResult<Self> {
        self.properties.set(name, value)?;
        Ok(self)
    }

    pub fn hole(mut self, hole: HoleSpec) -> Self {
        self.holes.push(hole);
        self
    }

    pub fn holes(mut self, holes: impl IntoIterator<Item = HoleSpec>) -> Self {
        self.holes.extend(holes);
        self
    }

    pub fn build(self) -> GenerateResult<MystSpec> {
        Ok(MystSpec {
            path: required(self.path, "path")?,
            zone: self.zone,
            properties: self.properties,
            holes: self.holes,
        })
    }
}
