//! mystmap - generate Zone grids and Myst masks as GeoJSON.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::generate::{GenerateCommand, MystArgs, ZoneArgs};
use error::CliError;
use runner::CliRunner;

#[derive(Debug, Parser)]
#[command(name = "mystmap", version = mystmap::VERSION)]
#[command(about = "Generate exact-decimal GeoJSON grids (zones) and world masks (mysts)")]
struct Cli {
    /// Log debug messages
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a grid of tiles from an origin
    Zone(ZoneArgs),

    /// Generate a world mask with a hole per zone
    Myst(MystArgs),

    /// View or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (name, command) = match cli.command {
        Commands::Config { command } => return commands::config::run(command),
        Commands::Zone(args) => ("zone", GenerateCommand::Zone(args)),
        Commands::Myst(args) => ("myst", GenerateCommand::Myst(args)),
    };

    let runner = CliRunner::new(cli.verbose)?;
    runner.log_startup(name);
    commands::generate::run(command, &runner)
}
