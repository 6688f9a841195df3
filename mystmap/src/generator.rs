//! Generation entry points.
//!
//! [`Generator`] ties the pipeline together: check the output path, validate
//! and resolve holes, open the file, stream the document. The `write_*`
//! methods run the same pipeline against any [`Write`] sink and skip the
//! file handling.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::GenerateResult;
use crate::log::{Logger, NoOpLogger};
use crate::myst::{MystGenerator, MystSpec};
use crate::output::{open_sink, resolve_path};
use crate::validate::{validate_myst, validate_zone, Advisory};
use crate::zone::{ZoneGenerator, ZoneSpec};
use crate::{log_debug, log_info, log_warn};

/// What was written to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    /// Features in the collection
    pub features: u64,
    /// Resolved hole anchors
    pub holes: usize,
    pub advisories: Vec<Advisory>,
}

/// Outcome of a successful generation to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Final path, extension included
    pub path: PathBuf,
    pub summary: DocumentSummary,
}

/// Zone and Myst generator.
///
/// Holds no per-document state; one instance can generate any number of
/// documents.
pub struct Generator {
    logger: Arc<dyn Logger>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(Arc::new(NoOpLogger))
    }
}

impl Generator {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    /// Generate a Zone file at the spec's path.
    pub fn generate_zone(&self, spec: &ZoneSpec) -> GenerateResult<GenerationReport> {
        let path = resolve_path(spec.path())?;
        let plan = validate_zone(spec)?;
        self.report_advisories(&plan.advisories);

        log_info!(
            self.logger,
            "Generating zone at {}: {} tiles in a {} zone from {}",
            path.display(),
            plan.tile,
            plan.zone,
            plan.origin
        );
        let features = ZoneGenerator::new(&plan).write(open_sink(&path)?)?;
        log_info!(
            self.logger,
            "Wrote {} features ({} holes) to {}",
            features,
            plan.holes.len(),
            path.display()
        );

        Ok(GenerationReport {
            path,
            summary: DocumentSummary {
                features,
                holes: plan.holes.len(),
                advisories: plan.advisories,
            },
        })
    }

    /// Generate a Myst file at the spec's path.
    pub fn generate_myst(&self, spec: &MystSpec) -> GenerateResult<GenerationReport> {
        let path = resolve_path(spec.path())?;
        let plan = validate_myst(spec)?;

        log_info!(
            self.logger,
            "Generating myst at {} with {} holes",
            path.display(),
            plan.holes.len()
        );
        let features = MystGenerator::new(&plan).write(open_sink(&path)?)?;
        log_info!(self.logger, "Wrote myst to {}", path.display());

        Ok(GenerationReport {
            path,
            summary: DocumentSummary {
                features,
                holes: plan.holes.len(),
                advisories: Vec::new(),
            },
        })
    }

    /// Validate a Zone and write it to `sink`. The spec's path is ignored.
    pub fn write_zone<W: Write>(&self, spec: &ZoneSpec, sink: W) -> GenerateResult<DocumentSummary> {
        let plan = validate_zone(spec)?;
        self.report_advisories(&plan.advisories);
        let features = ZoneGenerator::new(&plan).write(sink)?;
        log_debug!(self.logger, "Wrote zone with {} features", features);
        Ok(DocumentSummary {
            features,
            holes: plan.holes.len(),
            advisories: plan.advisories,
        })
    }

    /// Validate a Myst and write it to `sink`. The spec's path is ignored.
    pub fn write_myst<W: Write>(&self, spec: &MystSpec, sink: W) -> GenerateResult<DocumentSummary> {
        let plan = validate_myst(spec)?;
        let features = MystGenerator::new(&plan).write(sink)?;
        log_debug!(self.logger, "Wrote myst with {} holes", plan.holes.len());
        Ok(DocumentSummary {
            features,
            holes: plan.holes.len(),
            advisories: Vec::new(),
        })
    }

    fn report_advisories(&self, advisories: &[Advisory]) {
        for advisory in advisories {
            log_warn!(self.logger, "{}", advisory);
        }
    }
}
