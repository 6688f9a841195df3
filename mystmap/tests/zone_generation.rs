//! Integration tests for Zone generation.
//!
//! These tests drive the public API end to end: builder, validation, hole
//! resolution and the streamed document on disk.
//!
//! Run with: `cargo test --test zone_generation`

use std::fs;
use std::sync::Arc;

use serde_json::Value;
use tempfile::TempDir;

use mystmap::coord::ExactCoordinate;
use mystmap::decimal::ExactDecimal;
use mystmap::error::GenerateError;
use mystmap::generator::Generator;
use mystmap::hole::HoleSpec;
use mystmap::log::{LogLevel, MemoryLogger};
use mystmap::scale::Coarseness;
use mystmap::validate::Advisory;
use mystmap::zone::ZoneSpec;

// ============================================================================
// Helpers
// ============================================================================

fn coord(lon: &str, lat: &str) -> ExactCoordinate {
    ExactCoordinate::parse(lon, lat).unwrap()
}

fn small_zone(dir: &TempDir, name: &str, holes: Vec<HoleSpec>) -> ZoneSpec {
    ZoneSpec::builder()
        .path(dir.path().join(name))
        .unwrap()
        .origin(coord("0", "0"))
        .unwrap()
        .tile(Coarseness::Medium)
        .unwrap()
        .zone(Coarseness::Coarse)
        .unwrap()
        .property("name", "test")
        .unwrap()
        .holes(holes)
        .build()
        .unwrap()
}

fn read_features(text: &str) -> Vec<Value> {
    let document: Value = serde_json::from_str(text).unwrap();
    assert_eq!(document["type"], "FeatureCollection");
    document["features"].as_array().unwrap().clone()
}

/// Coordinates of a polygon's outer ring as literal text pairs.
fn ring_text(feature: &Value) -> Vec<(String, String)> {
    feature["geometry"]["coordinates"][0]
        .as_array()
        .unwrap()
        .iter()
        .map(|pos| (pos[0].to_string(), pos[1].to_string()))
        .collect()
}

fn pair(lon: &str, lat: &str) -> (String, String) {
    (lon.to_string(), lat.to_string())
}

// ============================================================================
// Document shape
// ============================================================================

#[test]
fn test_zone_writes_every_tile_in_raster_order() {
    let dir = TempDir::new().unwrap();
    let report = Generator::default()
        .generate_zone(&small_zone(&dir, "grid", vec![]))
        .unwrap();

    assert_eq!(report.path, dir.path().join("grid.geojson"));
    assert_eq!(report.summary.features, 100);
    assert_eq!(report.summary.holes, 0);

    let text = fs::read_to_string(&report.path).unwrap();
    assert!(text.ends_with("]}\n"));

    let features = read_features(&text);
    assert_eq!(features.len(), 100);
    for (expected, feature) in features.iter().enumerate() {
        assert_eq!(feature["id"].as_u64(), Some(expected as u64));
        assert_eq!(feature["properties"]["name"], "test");
    }

    assert_eq!(
        ring_text(&features[0]),
        vec![
            pair("0.001", "0"),
            pair("0.001", "0.001"),
            pair("0", "0.001"),
            pair("0", "0"),
            pair("0.001", "0"),
        ]
    );
    assert_eq!(
        ring_text(&features[99]),
        vec![
            pair("0.01", "0.009"),
            pair("0.01", "0.01"),
            pair("0.009", "0.01"),
            pair("0.009", "0.009"),
            pair("0.01", "0.009"),
        ]
    );
}

#[test]
fn test_adjacent_tiles_share_edges_exactly() {
    let dir = TempDir::new().unwrap();
    let report = Generator::default()
        .generate_zone(&small_zone(&dir, "edges", vec![]))
        .unwrap();
    let features = read_features(&fs::read_to_string(&report.path).unwrap());

    // Tile 1 sits right of tile 0: its left edge is tile 0's right edge.
    let left = ring_text(&features[0]);
    let right = ring_text(&features[1]);
    assert_eq!(left[0], right[3]);
    assert_eq!(left[1], right[2]);
}

#[test]
fn test_hole_tile_keeps_its_id_with_empty_coordinates() {
    let dir = TempDir::new().unwrap();
    let report = Generator::default()
        .generate_zone(&small_zone(&dir, "holes", vec![HoleSpec::SingleIndex(55)]))
        .unwrap();
    assert_eq!(report.summary.features, 100);
    assert_eq!(report.summary.holes, 1);

    let text = fs::read_to_string(&report.path).unwrap();
    assert!(text.contains(
        r#"{"type":"Feature","id":55,"geometry":{"type":"Polygon","coordinates":[]},"properties":{"name":"test"}}"#
    ));

    let features = read_features(&text);
    assert!(features[55]["geometry"]["coordinates"]
        .as_array()
        .unwrap()
        .is_empty());
    assert_eq!(ring_text(&features[54]).len(), 5);
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let holes = vec![
        HoleSpec::IndexList(vec![3, 97]),
        HoleSpec::DelimitedString("0.004 0.006".to_string()),
    ];
    let generator = Generator::default();
    let first = generator
        .generate_zone(&small_zone(&dir, "a", holes.clone()))
        .unwrap();
    let second = generator
        .generate_zone(&small_zone(&dir, "b", holes))
        .unwrap();

    assert_eq!(
        fs::read(&first.path).unwrap(),
        fs::read(&second.path).unwrap()
    );
}

#[test]
fn test_negative_origin_is_written_exactly() {
    let dir = TempDir::new().unwrap();
    let spec = ZoneSpec::builder()
        .path(dir.path().join("south.geojson"))
        .unwrap()
        .origin(coord("-0.01", "-45.1"))
        .unwrap()
        .tile(Coarseness::Coarse)
        .unwrap()
        .zone(Coarseness::SuperCoarse)
        .unwrap()
        .build()
        .unwrap();
    let report = Generator::default().generate_zone(&spec).unwrap();
    assert_eq!(report.path, dir.path().join("south.geojson"));

    let features = read_features(&fs::read_to_string(&report.path).unwrap());
    assert_eq!(features.len(), 100);
    assert_eq!(
        ring_text(&features[0])[3],
        pair("-0.01", "-45.1")
    );
    assert_eq!(ring_text(&features[99])[1], pair("0.09", "-45"));
}

// ============================================================================
// Holes and validation
// ============================================================================

#[test]
fn test_holes_on_the_upper_boundary_are_rejected() {
    let dir = TempDir::new().unwrap();
    for text in ["0.01,0", "0,0.01", "-0.001,0"] {
        let spec = small_zone(&dir, "bounds", vec![HoleSpec::DelimitedString(text.to_string())]);
        let result = Generator::default().generate_zone(&spec);
        assert!(
            matches!(result, Err(GenerateError::OutOfBoundsHole { .. })),
            "{} should be out of bounds, got {:?}",
            text,
            result
        );
    }
}

#[test]
fn test_last_tile_anchor_is_a_valid_hole() {
    let dir = TempDir::new().unwrap();
    let spec = small_zone(
        &dir,
        "corner",
        vec![HoleSpec::SingleCoordinate(coord("0.009", "0.009"))],
    );
    let report = Generator::default().generate_zone(&spec).unwrap();
    let features = read_features(&fs::read_to_string(&report.path).unwrap());
    assert!(features[99]["geometry"]["coordinates"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[test]
fn test_duplicate_holes_across_forms() {
    let dir = TempDir::new().unwrap();
    let spec = small_zone(
        &dir,
        "dup",
        vec![
            HoleSpec::SingleIndex(55),
            HoleSpec::DelimitedString("0.005,0.005".to_string()),
        ],
    );
    let result = Generator::default().generate_zone(&spec);
    assert!(matches!(result, Err(GenerateError::DuplicateHole(anchor)) if anchor == coord("0.005", "0.005")));
    assert!(!dir.path().join("dup.geojson").exists());
}

#[test]
fn test_invalid_input_creates_no_file() {
    let dir = TempDir::new().unwrap();
    let spec = small_zone(&dir, "bad", vec![HoleSpec::SingleIndex(100)]);
    let result = Generator::default().generate_zone(&spec);
    assert!(matches!(
        result,
        Err(GenerateError::IndexOutOfBounds { index: 100, max: 99 })
    ));
    assert!(!dir.path().join("bad.geojson").exists());
}

#[test]
fn test_oversized_coordinates_are_errors() {
    let dir = TempDir::new().unwrap();
    let hole = HoleSpec::DelimitedString("100000000000000000000000000000000000000,0".to_string());
    let result = Generator::default().generate_zone(&small_zone(&dir, "hole", vec![hole]));
    assert!(matches!(result, Err(GenerateError::InvalidFormat(_))));

    let origin = ExactCoordinate::new(ExactDecimal::new(10i128.pow(38), 0), ExactDecimal::ZERO);
    let result = ZoneSpec::builder()
        .path(dir.path().join("origin"))
        .unwrap()
        .origin(origin)
        .unwrap()
        .tile(Coarseness::Medium)
        .unwrap()
        .zone(Coarseness::Coarse)
        .unwrap()
        .build()
        .and_then(|spec| Generator::default().generate_zone(&spec));
    assert!(matches!(result, Err(GenerateError::InvalidFormat(_))));

    assert!(!dir.path().join("hole.geojson").exists());
    assert!(!dir.path().join("origin.geojson").exists());
}

#[test]
fn test_origin_precision_must_fit_tile() {
    let dir = TempDir::new().unwrap();
    let result = ZoneSpec::builder()
        .path(dir.path().join("fine"))
        .unwrap()
        .origin(coord("0.0005", "0"))
        .unwrap()
        .tile(Coarseness::Medium)
        .unwrap()
        .zone(Coarseness::Coarse)
        .unwrap()
        .build()
        .and_then(|spec| Generator::default().generate_zone(&spec));
    assert!(matches!(result, Err(GenerateError::ScaleMismatch { .. })));
}

#[test]
fn test_large_zone_advisory_is_logged() {
    let logger = Arc::new(MemoryLogger::new());
    let generator = Generator::new(logger.clone());
    let spec = ZoneSpec::builder()
        .path("unused")
        .unwrap()
        .origin(coord("0", "0"))
        .unwrap()
        .tile(Coarseness::Fine)
        .unwrap()
        .zone(Coarseness::SuperCoarse)
        .unwrap()
        .build()
        .unwrap();

    let summary = generator.write_zone(&spec, std::io::sink()).unwrap();
    assert_eq!(summary.features, 1_000_000);
    assert!(matches!(
        summary.advisories.as_slice(),
        [Advisory::LargeOutput { .. }]
    ));
    assert_eq!(logger.messages_at(LogLevel::Warn).len(), 1);
}
