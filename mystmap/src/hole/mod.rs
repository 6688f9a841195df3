//! Hole specifications and their resolution to anchors.
//!
//! A hole excludes one Zone tile, or one square region from a Myst. Callers
//! may describe holes in several interchangeable forms, captured by
//! [`HoleSpec`]. The [`HoleResolver`] turns each form into canonical
//! [`ExactCoordinate`] anchors (the lower-left corner of the excluded square).
//!
//! # Forms
//!
//! | Form | Example | Zone meaning | Myst meaning |
//! |------|---------|--------------|--------------|
//! | `SingleCoordinate` | `(0.005, 0.005)` | tile anchor | region anchor |
//! | `CoordinateList` | `[(0, 0), (0.001, 0)]` | tile anchors | region anchors |
//! | `DelimitedString` | `"0.005,0.005"` | tile anchor | region anchor |
//! | `SingleIndex` | `55` | row-major tile id | Cantor pairing index |
//! | `IndexList` | `[1, 2, 3]` | row-major tile ids | Cantor pairing indices |

mod pairing;
mod resolver;

pub use pairing::{anchor_for_index, unpair, PAIRING_STEP};
pub use resolver::{HoleContext, HoleResolver};

use std::path::Path;
use std::str::FromStr;

use serde_json::Value;

use crate::coord::{parse_delimited, ExactCoordinate};
use crate::error::{GenerateError, GenerateResult};

/// One hole entry as supplied by a caller.
///
/// Entries are consumed once, during generation. Only the anchors they
/// resolve to are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HoleSpec {
    /// No hole.
    #[default]
    None,
    /// A single anchor.
    SingleCoordinate(ExactCoordinate),
    /// Several anchors.
    CoordinateList(Vec<ExactCoordinate>),
    /// A single index, interpreted by the generation context.
    SingleIndex(i64),
    /// Several indices.
    IndexList(Vec<i64>),
    /// An anchor written as `"lon,lat"`, `"lon lat"`, `"lon_lat"` or `"lon/lat"`.
    DelimitedString(String),
}

impl HoleSpec {
    /// Returns true if this entry cannot produce any anchor.
    pub fn is_empty(&self) -> bool {
        match self {
            HoleSpec::None => true,
            HoleSpec::CoordinateList(list) => list.is_empty(),
            HoleSpec::IndexList(list) => list.is_empty(),
            _ => false,
        }
    }

    /// Classify an untyped JSON value.
    ///
    /// - `null` is [`HoleSpec::None`]
    /// - an integer is a [`HoleSpec::SingleIndex`]
    /// - a string is a [`HoleSpec::DelimitedString`]
    /// - `{"lon": .., "lat": ..}` is a [`HoleSpec::SingleCoordinate`]
    /// - an array of integers is a [`HoleSpec::IndexList`]
    /// - a two-element array with a fractional number is a [`HoleSpec::SingleCoordinate`]
    /// - an array of pairs, objects or strings is a [`HoleSpec::CoordinateList`]
    ///
    /// A pair of whole-degree numbers such as `[10, 20]` reads as an index
    /// list; write it as `"10,20"` or `{"lon": 10, "lat": 20}` instead.
    pub fn from_json(value: &Value) -> GenerateResult<Self> {
        match value {
            Value::Null => Ok(HoleSpec::None),
            Value::Number(_) => Ok(HoleSpec::SingleIndex(json_index(value)?)),
            Value::String(text) => Ok(HoleSpec::DelimitedString(text.clone())),
            Value::Object(_) => Ok(HoleSpec::SingleCoordinate(json_coordinate(value)?)),
            Value::Array(items) => {
                if items.is_empty() {
                    return Ok(HoleSpec::None);
                }
                if items.iter().all(is_json_integer) {
                    let indices = items.iter().map(json_index).collect::<GenerateResult<_>>()?;
                    return Ok(HoleSpec::IndexList(indices));
                }
                if items.len() == 2 && items.iter().all(Value::is_number) {
                    return Ok(HoleSpec::SingleCoordinate(json_coordinate(value)?));
                }
                let anchors = items
                    .iter()
                    .map(json_coordinate)
                    .collect::<GenerateResult<_>>()?;
                Ok(HoleSpec::CoordinateList(anchors))
            }
            Value::Bool(_) => Err(unsupported(value)),
        }
    }
}

/// A single command-line token: an integer is an index, anything starting
/// with `[`, `{` or a quote is JSON, and everything else is a delimited
/// coordinate.
impl FromStr for HoleSpec {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Ok(HoleSpec::None);
        }
        if let Ok(index) = text.parse::<i64>() {
            return Ok(HoleSpec::SingleIndex(index));
        }
        if text.starts_with(['[', '{', '"']) {
            let value: Value = serde_json::from_str(text)
                .map_err(|e| GenerateError::InvalidFormat(format!("'{}': {}", text, e)))?;
            return Self::from_json(&value);
        }
        Ok(HoleSpec::DelimitedString(text.to_string()))
    }
}

impl From<ExactCoordinate> for HoleSpec {
    fn from(anchor: ExactCoordinate) -> Self {
        HoleSpec::SingleCoordinate(anchor)
    }
}

impl From<i64> for HoleSpec {
    fn from(index: i64) -> Self {
        HoleSpec::SingleIndex(index)
    }
}

/// Read a JSON file holding an array of hole entries.
///
/// Each array element is classified with [`HoleSpec::from_json`], so a file
/// may mix forms: `[55, [1, 2], "0.001,0.002", {"lon": "0", "lat": "0.003"}]`.
pub fn read_holes_file(path: &Path) -> GenerateResult<Vec<HoleSpec>> {
    let text = std::fs::read_to_string(path).map_err(|e| GenerateError::Path {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|e| {
        GenerateError::InvalidFormat(format!("{}: {}", path.display(), e))
    })?;
    match value {
        Value::Array(entries) => entries.iter().map(HoleSpec::from_json).collect(),
        other => Err(GenerateError::InvalidFormat(format!(
            "{}: expected a JSON array of holes, found {}",
            path.display(),
            json_kind(&other)
        ))),
    }
}

fn is_json_integer(value: &Value) -> bool {
    value.as_i64().is_some()
}

fn json_index(value: &Value) -> GenerateResult<i64> {
    value.as_i64().ok_or_else(|| unsupported(value))
}

/// Read a coordinate from `[lon, lat]`, `{"lon": .., "lat": ..}` or a
/// delimited string. Components may be numbers or numeric strings.
fn json_coordinate(value: &Value) -> GenerateResult<ExactCoordinate> {
    match value {
        Value::String(text) => parse_delimited(text),
        Value::Array(pair) if pair.len() == 2 => {
            Ok(ExactCoordinate::new(
                json_component(&pair[0])?.parse()?,
                json_component(&pair[1])?.parse()?,
            ))
        }
        Value::Object(fields) => match (fields.get("lon"), fields.get("lat")) {
            (Some(lon), Some(lat)) => Ok(ExactCoordinate::new(
                json_component(lon)?.parse()?,
                json_component(lat)?.parse()?,
            )),
            _ => Err(unsupported(value)),
        },
        _ => Err(unsupported(value)),
    }
}

/// Literal text of a numeric component, without going through `f64`.
fn json_component(value: &Value) -> GenerateResult<String> {
    match value {
        Value::Number(n) => Ok(n.to_string()),
        Value::String(text) => Ok(text.clone()),
        _ => Err(unsupported(value)),
    }
}

fn unsupported(value: &Value) -> GenerateError {
    GenerateError::UnsupportedElement(format!("{} {}", json_kind(value), value))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
