//! Handlers for `mystmap zone` and `mystmap myst`.

use std::path::{Path, PathBuf};

use mystmap::config::ConfigFile;
use mystmap::coord::ExactCoordinate;
use mystmap::generator::GenerationReport;
use mystmap::hole::HoleSpec;
use mystmap::myst::MystSpec;
use mystmap::zone::ZoneSpec;

use super::args::{MystArgs, PropertyArg, ZoneArgs};
use super::traits::{CommandContext, CommandHandler, Output};
use crate::error::CliError;

/// Resolve a relative output path against `[output] directory`.
pub fn resolve_output(path: &Path, config: &ConfigFile) -> PathBuf {
    match &config.output.directory {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// Command-line holes followed by those from the holes file.
fn collect_holes(
    holes: Vec<HoleSpec>,
    holes_file: Option<&Path>,
    ctx: &CommandContext<'_>,
) -> Result<Vec<HoleSpec>, CliError> {
    let mut all = holes;
    if let Some(path) = holes_file {
        all.extend(ctx.generator.read_holes_file(path)?);
    }
    Ok(all)
}

fn print_report(output: &dyn Output, kind: &str, report: &GenerationReport) {
    output.println(&format!("{} written to {}", kind, report.path.display()));
    output.indented(&format!("Features: {}", report.summary.features));
    output.indented(&format!("Holes:    {}", report.summary.holes));
    for advisory in &report.summary.advisories {
        output.newline();
        output.println(&format!("Note: {}", advisory));
    }
}

/// Handler for `mystmap zone`.
pub struct ZoneHandler;

impl CommandHandler for ZoneHandler {
    type Args = ZoneArgs;

    fn execute(args: Self::Args, ctx: &CommandContext<'_>) -> Result<(), CliError> {
        let tile = args.tile.unwrap_or(ctx.config.zone.tile_coarseness);
        let zone = args.zone.unwrap_or(ctx.config.zone.zone_coarseness);
        let holes = collect_holes(args.holes, args.holes_file.as_deref(), ctx)?;

        let mut builder = ZoneSpec::builder()
            .path(resolve_output(&args.output, ctx.config))?
            .origin(ExactCoordinate::new(args.lon, args.lat))?
            .tile(tile)?
            .zone(zone)?
            .holes(holes);
        for PropertyArg { name, value } in args.properties {
            builder = builder.property(&name, value)?;
        }
        let spec = builder.build()?;

        ctx.output.println(&format!(
            "Generating zone at {}: {} tiles in a {} zone",
            spec.origin(),
            tile,
            zone
        ));
        let report = ctx.generator.generate_zone(&spec)?;
        print_report(ctx.output, "Zone", &report);
        Ok(())
    }
}

/// Handler for `mystmap myst`.
pub struct MystHandler;

impl CommandHandler for MystHandler {
    type Args = MystArgs;

    fn execute(args: Self::Args, ctx: &CommandContext<'_>) -> Result<(), CliError> {
        let holes = collect_holes(args.holes, args.holes_file.as_deref(), ctx)?;

        let mut builder = MystSpec::builder()
            .path(resolve_output(&args.output, ctx.config))?
            .holes(holes);
        if let Some(zone) = args.zone {
            builder = builder.zone(zone)?;
        }
        for PropertyArg { name, value } in args.properties {
            builder = builder.property(&name, value)?;
        }
        let spec = builder.build()?;

        ctx.output.println("Generating myst");
        let report = ctx.generator.generate_myst(&spec)?;
        print_report(ctx.output, "Myst", &report);
        Ok(())
    }
}
