//! Argument types for the `zone` and `myst` commands.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;

use mystmap::decimal::ExactDecimal;
use mystmap::geojson::PropertyValue;
use mystmap::hole::HoleSpec;
use mystmap::scale::Coarseness;

/// A `name=value` property assignment.
///
/// The value is read as a JSON literal when it parses as one (`42`,
/// `true`, `[1,2]`, `"text"`) and as a plain string otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyArg {
    pub name: String,
    pub value: PropertyValue,
}

impl FromStr for PropertyArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected name=value, got '{}'", s))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("property name missing in '{}'", s));
        }
        Ok(Self {
            name: name.to_string(),
            value: PropertyValue::parse_lenient(value.trim()),
        })
    }
}

/// Arguments for `mystmap zone`.
#[derive(Debug, Clone, Args)]
pub struct ZoneArgs {
    /// Output file; `.geojson` is appended when missing
    #[arg(long, short)]
    pub output: PathBuf,

    /// Origin longitude (lower-left corner of the zone)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: ExactDecimal,

    /// Origin latitude (lower-left corner of the zone)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: ExactDecimal,

    /// Tile side: a level name (fine, medium, ...) or its value (0.001)
    #[arg(long)]
    pub tile: Option<Coarseness>,

    /// Zone side: a level name or its value
    #[arg(long)]
    pub zone: Option<Coarseness>,

    /// Tile to leave out: a tile id (55), "lon,lat", or a JSON list
    #[arg(long = "hole", allow_hyphen_values = true)]
    pub holes: Vec<HoleSpec>,

    /// JSON file holding an array of holes
    #[arg(long)]
    pub holes_file: Option<PathBuf>,

    /// Property added to every feature, as name=value
    #[arg(long = "property", short = 'p')]
    pub properties: Vec<PropertyArg>,
}

/// Arguments for `mystmap myst`.
#[derive(Debug, Clone, Args)]
pub struct MystArgs {
    /// Output file; `.geojson` is appended when missing
    #[arg(long, short)]
    pub output: PathBuf,

    /// Side of each hole; required when holes are given
    #[arg(long)]
    pub zone: Option<Coarseness>,

    /// Zone to cut out: a pairing index (1), "lon,lat", or a JSON list
    #[arg(long = "hole", allow_hyphen_values = true)]
    pub holes: Vec<HoleSpec>,

    /// JSON file holding an array of holes
    #[arg(long)]
    pub holes_file: Option<PathBuf>,

    /// Property added to the feature, as name=value
    #[arg(long = "property", short = 'p')]
    pub properties: Vec<PropertyArg>,
}
