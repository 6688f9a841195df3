//! Exact fixed-point decimal numbers.
//!
//! An [`ExactDecimal`] is an unscaled integer together with a count of
//! fractional digits, so `0.001` is stored as `(1, 3)`. All arithmetic,
//! comparison and formatting works on the integers directly; no value ever
//! passes through binary floating point.
//!
//! Two decimals compare and hash by value: `1.50` and `1.5` are equal even
//! though their representation scales differ.
//!
//! Arithmetic is checked. Parsed values are limited to [`MAX_INTEGER_DIGITS`]
//! whole digits and [`MAX_SCALE`] fractional digits, so any two of them can be
//! aligned and added without leaving `i128`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

/// Largest number of fractional digits accepted when parsing.
pub const MAX_SCALE: u32 = 18;

/// Largest number of whole digits accepted when parsing, leading zeros aside.
pub const MAX_INTEGER_DIGITS: usize = 18;

/// Error returned when text is not a plain decimal literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a valid decimal number ({reason})")]
pub struct ParseDecimalError {
    input: String,
    reason: &'static str,
}

/// An exact decimal value with an explicit scale.
#[derive(Debug, Clone, Copy)]
pub struct ExactDecimal {
    unscaled: i128,
    scale: u32,
}

#[inline]
fn checked_pow10(exp: u32) -> Option<i128> {
    10i128.checked_pow(exp)
}

/// Bring two decimals to their common (larger) scale.
///
/// Returns `None` if the rescaled operand does not fit in an `i128`.
fn align(a: &ExactDecimal, b: &ExactDecimal) -> Option<(i128, i128, u32)> {
    let scale = a.scale.max(b.scale);
    let a_unscaled = a.unscaled.checked_mul(checked_pow10(scale - a.scale)?)?;
    let b_unscaled = b.unscaled.checked_mul(checked_pow10(scale - b.scale)?)?;
    Some((a_unscaled, b_unscaled, scale))
}

impl ExactDecimal {
    /// Zero at scale 0.
    pub const ZERO: ExactDecimal = ExactDecimal::new(0, 0);

    /// Create a decimal worth `unscaled * 10^-scale`.
    pub const fn new(unscaled: i128, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    /// Create a whole number.
    pub const fn from_int(value: i64) -> Self {
        Self::new(value as i128, 0)
    }

    /// The unscaled integer of this representation.
    pub fn unscaled(&self) -> i128 {
        self.unscaled
    }

    /// The representation scale, including insignificant trailing zeros.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Same value with insignificant trailing zeros removed.
    pub fn normalized(&self) -> Self {
        let mut unscaled = self.unscaled;
        let mut scale = self.scale;
        while scale > 0 && unscaled % 10 == 0 {
            unscaled /= 10;
            scale -= 1;
        }
        Self { unscaled, scale }
    }

    /// Count of significant fractional digits.
    ///
    /// `0.010` has a scale of 1, `100` has a scale of 0.
    pub fn scale_of(&self) -> u32 {
        self.normalized().scale
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.unscaled == 0
    }

    /// Re-express the value at `scale` fractional digits.
    ///
    /// Returns `None` when reducing the scale would drop significant digits,
    /// or when the rescaled value does not fit.
    pub fn with_scale(&self, scale: u32) -> Option<Self> {
        if scale >= self.scale {
            let unscaled = self
                .unscaled
                .checked_mul(checked_pow10(scale - self.scale)?)?;
            return Some(Self::new(unscaled, scale));
        }
        let factor = checked_pow10(self.scale - scale)?;
        if self.unscaled % factor == 0 {
            Some(Self::new(self.unscaled / factor, scale))
        } else {
            None
        }
    }

    /// Multiply by a whole number. The scale is unchanged.
    pub fn checked_mul_int(&self, factor: i64) -> Option<Self> {
        let unscaled = self.unscaled.checked_mul(i128::from(factor))?;
        Some(Self::new(unscaled, self.scale))
    }

    /// Exact sum at the larger of the two scales, or `None` on overflow.
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let (a, b, scale) = align(self, rhs)?;
        Some(Self::new(a.checked_add(b)?, scale))
    }

    /// Exact difference at the larger of the two scales, or `None` on overflow.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let (a, b, scale) = align(self, rhs)?;
        Some(Self::new(a.checked_sub(b)?, scale))
    }

    /// Exact integer quotient `self / divisor`.
    ///
    /// Returns `None` if the divisor is zero or the quotient is not a whole
    /// number that fits in an `i64`.
    pub fn ratio(&self, divisor: &Self) -> Option<i64> {
        let (a, b, _) = align(self, divisor)?;
        if b == 0 || a % b != 0 {
            return None;
        }
        i64::try_from(a / b).ok()
    }
}

impl Default for ExactDecimal {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for ExactDecimal {
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}

impl PartialEq for ExactDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExactDecimal {}

impl Hash for ExactDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.normalized();
        n.unscaled.hash(state);
        n.scale.hash(state);
    }
}

impl PartialOrd for ExactDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match align(self, other) {
            Some((a, b, _)) => a.cmp(&b),
            // Only the operand with the smaller scale is rescaled. If it
            // overflows, its magnitude exceeds the other's and its sign decides.
            None if self.scale < other.scale => self.unscaled.cmp(&0),
            None => 0.cmp(&other.unscaled),
        }
    }
}

/// Minimal text form: no trailing zeros, no exponent, `.` as separator.
impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.normalized();
        let sign = if n.unscaled < 0 { "-" } else { "" };
        let digits = n.unscaled.unsigned_abs();
        if n.scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }
        let divisor = 10u128.pow(n.scale);
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            digits / divisor,
            digits % divisor,
            width = n.scale as usize
        )
    }
}

impl FromStr for ExactDecimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ParseDecimalError {
            input: s.to_string(),
            reason,
        };

        let text = s.trim();
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            Some(_) => (false, text),
            None => return Err(err("empty input")),
        };

        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(err("no digits"));
        }
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(int_part) || !is_digits(frac_part) {
            return Err(err("unexpected character"));
        }

        let scale = frac_part.len() as u32;
        if scale > MAX_SCALE {
            return Err(err("too many fractional digits"));
        }
        if int_part.trim_start_matches('0').len() > MAX_INTEGER_DIGITS {
            return Err(err("too many integer digits"));
        }

        let mut unscaled: i128 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            unscaled = unscaled
                .checked_mul(10)
                .and_then(|v| v.checked_add(i128::from(b - b'0')))
                .ok_or_else(|| err("value out of range"))?;
        }
        if negative {
            unscaled = -unscaled;
        }

        Ok(Self::new(unscaled, scale))
    }
}
