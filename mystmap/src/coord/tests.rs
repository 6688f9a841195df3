//! Tests for exact coordinates

use super::*;
use crate::decimal::ExactDecimal;
use crate::scale::Coarseness;

fn d(s: &str) -> ExactDecimal {
    s.parse().unwrap()
}

#[test]
fn test_parse_each_delimiter() {
    let expected = ExactCoordinate::new(d("-74.006"), d("40.7128"));
    for text in [
        "-74.006,40.7128",
        "-74.006 40.7128",
        "-74.006_40.7128",
        "-74.006/40.7128",
        "  -74.006 , 40.7128 ",
    ] {
        assert_eq!(parse_delimited(text).unwrap(), expected, "{text:?}");
    }
}

#[test]
fn test_parse_rejects_single_value() {
    let result = parse_delimited("12.5");
    assert!(matches!(result, Err(GenerateError::InvalidFormat(_))));
}

#[test]
fn test_parse_rejects_extra_component() {
    assert!(parse_delimited("1,2,3").is_err());
}

#[test]
fn test_parse_rejects_non_numeric() {
    let result = parse_delimited("north,south");
    assert!(matches!(result, Err(GenerateError::InvalidFormat(_))));
}

#[test]
fn test_equality_is_by_value() {
    let a = ExactCoordinate::parse("0.10", "1").unwrap();
    let b = ExactCoordinate::parse("0.1", "1.000").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_scale_of_takes_the_larger_axis() {
    let coord = ExactCoordinate::parse("0.5", "0.125").unwrap();
    assert_eq!(coord.scale_of(), 3);
}

#[test]
fn test_offset() {
    let origin = ExactCoordinate::parse("0", "0").unwrap();
    let moved = origin.offset(d("0.005"), d("0.007")).unwrap();
    assert_eq!(moved, ExactCoordinate::parse("0.005", "0.007").unwrap());
}

#[test]
fn test_offset_out_of_range() {
    let edge = ExactCoordinate::new(ExactDecimal::new(i128::MAX, 0), d("0"));
    let result = edge.offset(d("1"), d("0"));
    assert!(matches!(result, Err(GenerateError::InvalidFormat(_))));
}

#[test]
fn test_fit_to_rejects_values_too_large_to_rescale() {
    let coord = ExactCoordinate::new(ExactDecimal::new(i128::MAX / 10, 0), d("0"));
    let result = coord.fit_to(Coarseness::Medium);
    assert!(matches!(result, Err(GenerateError::InvalidFormat(_))));
}

#[test]
fn test_parse_rejects_oversized_component() {
    let result = parse_delimited("100000000000000000000000000000000000000,0");
    assert!(matches!(result, Err(GenerateError::InvalidFormat(_))));
}

#[test]
fn test_fit_to_pads_scale() {
    let coord = ExactCoordinate::parse("0.1", "2").unwrap();
    let fitted = coord.fit_to(Coarseness::Medium).unwrap();
    assert_eq!(fitted.lon.scale(), 3);
    assert_eq!(fitted.lat.scale(), 3);
    assert_eq!(fitted, coord);
}

#[test]
fn test_fit_to_rejects_excess_precision() {
    let coord = ExactCoordinate::parse("0.0005", "0").unwrap();
    let result = coord.fit_to(Coarseness::Medium);
    assert!(matches!(
        result,
        Err(GenerateError::ScaleMismatch { scale: 3, .. })
    ));
}

#[test]
fn test_fit_to_accepts_insignificant_zeros() {
    let coord = ExactCoordinate::parse("0.0100", "0").unwrap();
    assert!(coord.fit_to(Coarseness::Coarse).is_ok());
}

#[test]
fn test_display() {
    let coord = ExactCoordinate::parse("-179.90", "-90").unwrap();
    assert_eq!(coord.to_string(), "(-179.9, -90)");
}

#[test]
fn test_world_bounds() {
    assert_eq!(MIN_LON.to_string(), "-180");
    assert_eq!(MAX_LON.to_string(), "180");
    assert_eq!(MIN_LAT.to_string(), "-90");
    assert_eq!(MAX_LAT.to_string(), "90");
}
