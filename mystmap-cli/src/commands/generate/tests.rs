//! Handler tests with mock output and generator.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use mystmap::config::ConfigFile;
use mystmap::coord::ExactCoordinate;
use mystmap::error::GenerateError;
use mystmap::generator::{DocumentSummary, GenerationReport};
use mystmap::hole::HoleSpec;
use mystmap::myst::MystSpec;
use mystmap::scale::Coarseness;
use mystmap::validate::Advisory;
use mystmap::zone::ZoneSpec;

use super::args::{MystArgs, PropertyArg, ZoneArgs};
use super::handlers::{resolve_output, MystHandler, ZoneHandler};
use super::traits::{CommandContext, CommandHandler, GeneratorService, Output};
use crate::error::CliError;

// ============================================================================
// Mocks
// ============================================================================

#[derive(Default)]
struct MockOutput {
    messages: RwLock<Vec<String>>,
}

impl MockOutput {
    fn contains(&self, substring: &str) -> bool {
        self.messages
            .read()
            .unwrap()
            .iter()
            .any(|m| m.contains(substring))
    }
}

impl Output for MockOutput {
    fn println(&self, message: &str) {
        self.messages.write().unwrap().push(message.to_string());
    }
}

/// Records specs instead of writing files.
#[derive(Default)]
struct MockGeneratorService {
    zones: RwLock<Vec<ZoneSpec>>,
    mysts: RwLock<Vec<MystSpec>>,
    holes_file: Vec<HoleSpec>,
    advisories: Vec<Advisory>,
    fail: bool,
}

impl MockGeneratorService {
    fn with_holes_file(holes: Vec<HoleSpec>) -> Self {
        Self {
            holes_file: holes,
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn report(&self, path: &Path, features: u64, holes: usize) -> GenerationReport {
        GenerationReport {
            path: path.with_extension("geojson"),
            summary: DocumentSummary {
                features,
                holes,
                advisories: self.advisories.clone(),
            },
        }
    }

    fn last_zone(&self) -> ZoneSpec {
        self.zones.read().unwrap().last().cloned().unwrap()
    }

    fn last_myst(&self) -> MystSpec {
        self.mysts.read().unwrap().last().cloned().unwrap()
    }
}

impl GeneratorService for MockGeneratorService {
    fn read_holes_file(&self, _path: &Path) -> Result<Vec<HoleSpec>, CliError> {
        Ok(self.holes_file.clone())
    }

    fn generate_zone(&self, spec: &ZoneSpec) -> Result<GenerationReport, CliError> {
        if self.fail {
            return Err(GenerateError::DuplicateHole(spec.origin()).into());
        }
        self.zones.write().unwrap().push(spec.clone());
        Ok(self.report(spec.path(), 100, spec.holes().len()))
    }

    fn generate_myst(&self, spec: &MystSpec) -> Result<GenerationReport, CliError> {
        if self.fail {
            return Err(GenerateError::Parameter("mock failure".to_string()).into());
        }
        self.mysts.write().unwrap().push(spec.clone());
        Ok(self.report(spec.path(), 1, spec.holes().len()))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn zone_args() -> ZoneArgs {
    ZoneArgs {
        output: PathBuf::from("grid"),
        lon: "12.5".parse().unwrap(),
        lat: "-3".parse().unwrap(),
        tile: None,
        zone: None,
        holes: Vec::new(),
        holes_file: None,
        properties: Vec::new(),
    }
}

fn myst_args() -> MystArgs {
    MystArgs {
        output: PathBuf::from("world"),
        zone: None,
        holes: Vec::new(),
        holes_file: None,
        properties: Vec::new(),
    }
}

fn property(text: &str) -> PropertyArg {
    text.parse().unwrap()
}

// ============================================================================
// Zone handler
// ============================================================================

#[test]
fn test_zone_uses_config_defaults() {
    let output = MockOutput::default();
    let generator = MockGeneratorService::default();
    let mut config = ConfigFile::default();
    config.zone.tile_coarseness = Coarseness::Coarse;
    config.zone.zone_coarseness = Coarseness::SuperCoarse;
    let ctx = CommandContext::new(&output, &generator, &config);

    ZoneHandler::execute(zone_args(), &ctx).unwrap();

    let spec = generator.last_zone();
    assert_eq!(spec.tile(), Coarseness::Coarse);
    assert_eq!(spec.zone(), Coarseness::SuperCoarse);
    assert_eq!(spec.origin(), ExactCoordinate::parse("12.5", "-3").unwrap());
    assert!(output.contains("Zone written to grid.geojson"));
    assert!(output.contains("Features: 100"));
}

#[test]
fn test_zone_arguments_override_config() {
    let output = MockOutput::default();
    let generator = MockGeneratorService::default();
    let config = ConfigFile::default();
    let ctx = CommandContext::new(&output, &generator, &config);

    let mut args = zone_args();
    args.tile = Some(Coarseness::Fine);
    args.zone = Some(Coarseness::Medium);
    ZoneHandler::execute(args, &ctx).unwrap();

    let spec = generator.last_zone();
    assert_eq!(spec.tile(), Coarseness::Fine);
    assert_eq!(spec.zone(), Coarseness::Medium);
}

#[test]
fn test_zone_properties_passed_through() {
    let output = MockOutput::default();
    let generator = MockGeneratorService::default();
    let config = ConfigFile::default();
    let ctx = CommandContext::new(&output, &generator, &config);

    let mut args = zone_args();
    args.properties = vec![property("Name=harbour"), property("level=2")];
    ZoneHandler::execute(args, &ctx).unwrap();

    let spec = generator.last_zone();
    assert_eq!(
        spec.properties().get("name").unwrap().as_literal(),
        "\"harbour\""
    );
    assert_eq!(spec.properties().get("level").unwrap().as_literal(), "2");
}

#[test]
fn test_zone_duplicate_property_rejected() {
    let output = MockOutput::default();
    let generator = MockGeneratorService::default();
    let config = ConfigFile::default();
    let ctx = CommandContext::new(&output, &generator, &config);

    let mut args = zone_args();
    args.properties = vec![property("name=a"), property("NAME=b")];
    let result = ZoneHandler::execute(args, &ctx);

    assert!(matches!(
        result,
        Err(CliError::Generate(GenerateError::Parameter(_)))
    ));
    assert!(generator.zones.read().unwrap().is_empty());
}

#[test]
fn test_zone_holes_from_arguments_then_file() {
    let output = MockOutput::default();
    let generator = MockGeneratorService::with_holes_file(vec![HoleSpec::SingleIndex(7)]);
    let config = ConfigFile::default();
    let ctx = CommandContext::new(&output, &generator, &config);

    let mut args = zone_args();
    args.holes = vec!["55".parse().unwrap()];
    args.holes_file = Some(PathBuf::from("holes.json"));
    ZoneHandler::execute(args, &ctx).unwrap();

    assert_eq!(
        generator.last_zone().holes(),
        &[HoleSpec::SingleIndex(55), HoleSpec::SingleIndex(7)]
    );
    assert!(output.contains("Holes:    2"));
}

#[test]
fn test_zone_advisory_printed() {
    let output = MockOutput::default();
    let generator = MockGeneratorService {
        advisories: vec![Advisory::LargeOutput {
            tile: Coarseness::Fine,
            zone: Coarseness::SuperCoarse,
            features: 1_000_000,
        }],
        ..MockGeneratorService::default()
    };
    let config = ConfigFile::default();
    let ctx = CommandContext::new(&output, &generator, &config);

    ZoneHandler::execute(zone_args(), &ctx).unwrap();
    assert!(output.contains("Note:"));
    assert!(output.contains("1000000 features"));
}

#[test]
fn test_zone_generation_error_propagates() {
    let output = MockOutput::default();
    let generator = MockGeneratorService::failing();
    let config = ConfigFile::default();
    let ctx = CommandContext::new(&output, &generator, &config);

    let result = ZoneHandler::execute(zone_args(), &ctx);
    assert!(matches!(
        result,
        Err(CliError::Generate(GenerateError::DuplicateHole(_)))
    ));
    assert!(!output.contains("written to"));
}

// ============================================================================
// Myst handler
// ============================================================================

#[test]
fn test_myst_without_zone() {
    let output = MockOutput::default();
    let generator = MockGeneratorService::default();
    let config = ConfigFile::default();
    let ctx = CommandContext::new(&output, &generator, &config);

    MystHandler::execute(myst_args(), &ctx).unwrap();

    let spec = generator.last_myst();
    assert_eq!(spec.zone(), None);
    assert!(spec.holes().is_empty());
    assert!(output.contains("Myst written to world.geojson"));
}

#[test]
fn test_myst_zone_and_holes() {
    let output = MockOutput::default();
    let generator = MockGeneratorService::default();
    let config = ConfigFile::default();
    let ctx = CommandContext::new(&output, &generator, &config);

    let mut args = myst_args();
    args.zone = Some(Coarseness::SuperCoarse);
    args.holes = vec!["1".parse().unwrap(), "-10.5,20".parse().unwrap()];
    args.properties = vec![property("kind=mask")];
    MystHandler::execute(args, &ctx).unwrap();

    let spec = generator.last_myst();
    assert_eq!(spec.zone(), Some(Coarseness::SuperCoarse));
    assert_eq!(
        spec.holes(),
        &[
            HoleSpec::SingleIndex(1),
            HoleSpec::DelimitedString("-10.5,20".to_string())
        ]
    );
    assert!(output.contains("Holes:    2"));
}

#[test]
fn test_myst_error_propagates() {
    let output = MockOutput::default();
    let generator = MockGeneratorService::failing();
    let config = ConfigFile::default();
    let ctx = CommandContext::new(&output, &generator, &config);

    assert!(MystHandler::execute(myst_args(), &ctx).is_err());
}

// ============================================================================
// Output paths
// ============================================================================

#[test]
fn test_relative_output_joined_to_configured_directory() {
    let mut config = ConfigFile::default();
    assert_eq!(
        resolve_output(Path::new("grid"), &config),
        PathBuf::from("grid")
    );

    config.output.directory = Some(PathBuf::from("/srv/maps"));
    assert_eq!(
        resolve_output(Path::new("grid"), &config),
        PathBuf::from("/srv/maps/grid")
    );
    assert_eq!(
        resolve_output(Path::new("/tmp/grid"), &config),
        PathBuf::from("/tmp/grid")
    );
}

#[test]
fn test_zone_output_uses_configured_directory() {
    let output = MockOutput::default();
    let generator = MockGeneratorService::default();
    let mut config = ConfigFile::default();
    config.output.directory = Some(PathBuf::from("/srv/maps"));
    let ctx = CommandContext::new(&output, &generator, &config);

    ZoneHandler::execute(zone_args(), &ctx).unwrap();
    assert_eq!(generator.last_zone().path(), Path::new("/srv/maps/grid"));
}
