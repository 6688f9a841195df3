//! Inverse Cantor pairing for Myst hole indices.
//!
//! The Cantor pairing function enumerates every pair of natural numbers along
//! anti-diagonals. Myst holes may be addressed by a single index `v >= 1`,
//! decoded here to a pair `(px, py)` and placed on a 0.1 degree lattice
//! anchored at (-180, -90):
//!
//! ```text
//! t   = floor((-1 + sqrt(1 + 8v)) / 2)
//! px  = t(t + 3) / 2 - v
//! py  = v - t(t + 1) / 2
//! lon = px * 0.1 - 180
//! lat = py * 0.1 - 90
//! ```
//!
//! So `v = 1` decodes to `(1, 0)`, the anchor (-179.9, -90), and `v = 2`
//! decodes to `(0, 1)`, the anchor (-180, -89.9).

use crate::coord::{ExactCoordinate, MIN_LAT, MIN_LON};
use crate::decimal::ExactDecimal;
use crate::error::{GenerateError, GenerateResult};

/// Lattice step of decoded Myst anchors (0.1 degree).
pub const PAIRING_STEP: ExactDecimal = ExactDecimal::new(1, 1);

/// Floor of the square root, computed on integers.
fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    // Newton iteration from an upper bound converges down to the floor.
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Decode a pairing index into its `(px, py)` pair.
pub fn unpair(index: i64) -> GenerateResult<(u64, u64)> {
    if index < 1 {
        return Err(GenerateError::InvalidIndex(index));
    }
    let v = index as u128;
    let t = (isqrt(1 + 8 * v) - 1) / 2;
    let px = t * (t + 3) / 2 - v;
    let py = v - t * (t + 1) / 2;
    Ok((px as u64, py as u64))
}

/// Decode a pairing index into its lattice anchor.
pub fn anchor_for_index(index: i64) -> GenerateResult<ExactCoordinate> {
    let (px, py) = unpair(index)?;
    let step = |n: u64| {
        i64::try_from(n)
            .ok()
            .and_then(|n| PAIRING_STEP.checked_mul_int(n))
            .ok_or(GenerateError::InvalidIndex(index))
    };
    ExactCoordinate::new(MIN_LON, MIN_LAT).offset(step(px)?, step(py)?)
}
