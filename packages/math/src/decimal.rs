// SPDX-License-Identifier: MIT
// Fixed-Precision Decimal (18 fractional digits on a scaled i128)

use core::fmt;
use core::str::FromStr;

use soroban_sdk::contracttype;

use crate::constants::{ONE_RAW, PRECISION};

/// Errors produced by decimal arithmetic and parsing
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecError {
    /// Result does not fit in the scaled i128
    Overflow,
    /// Empty input (or a lone sign)
    Empty,
    /// Not of the form `[-]digits[.digits]`
    InvalidFormat,
    /// More than PRECISION fractional digits
    TooPrecise,
}

/// Signed decimal stored as `value * 10^18`.
///
/// Ordering, equality and zero tests are exact. Every arithmetic operation is
/// checked and reports overflow instead of wrapping or saturating.
#[contracttype]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Dec(pub i128);

impl Dec {
    pub const ZERO: Dec = Dec(0);
    pub const ONE: Dec = Dec(ONE_RAW);

    /// Wrap an already-scaled value
    #[inline]
    pub const fn from_raw(raw: i128) -> Self {
        Dec(raw)
    }

    /// Whole number; an i64 always fits after scaling
    #[inline]
    pub const fn from_int(value: i64) -> Self {
        Dec(value as i128 * ONE_RAW)
    }

    /// Whole number from an i128, failing when the scaled value overflows
    pub fn checked_from_int(value: i128) -> Result<Self, DecError> {
        value.checked_mul(ONE_RAW).map(Dec).ok_or(DecError::Overflow)
    }

    #[inline]
    pub const fn raw(&self) -> i128 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Dec) -> Result<Dec, DecError> {
        self.0.checked_add(other.0).map(Dec).ok_or(DecError::Overflow)
    }

    pub fn checked_sub(self, other: Dec) -> Result<Dec, DecError> {
        self.0.checked_sub(other.0).map(Dec).ok_or(DecError::Overflow)
    }

    pub fn checked_neg(self) -> Result<Dec, DecError> {
        self.0.checked_neg().map(Dec).ok_or(DecError::Overflow)
    }

    pub fn checked_abs(self) -> Result<Dec, DecError> {
        self.0.checked_abs().map(Dec).ok_or(DecError::Overflow)
    }

    /// Parse `[-]digits[.digits]` with at most 18 fractional digits.
    ///
    /// Both sides of the point must be non-empty: ".5" and "5." are rejected.
    pub fn parse(text: &str) -> Result<Dec, DecError> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if body.is_empty() {
            return Err(DecError::Empty);
        }

        let (whole, fraction) = match body.split_once('.') {
            Some((w, f)) => {
                if w.is_empty() || f.is_empty() {
                    return Err(DecError::InvalidFormat);
                }
                (w, f)
            }
            None => (body, ""),
        };
        if fraction.len() > PRECISION as usize {
            return Err(DecError::TooPrecise);
        }

        // Magnitude as u128 so i128::MIN still parses
        let mut magnitude: u128 = 0;
        for byte in whole.bytes().chain(fraction.bytes()) {
            let digit = match byte {
                b'0'..=b'9' => (byte - b'0') as u128,
                _ => return Err(DecError::InvalidFormat),
            };
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(digit))
                .ok_or(DecError::Overflow)?;
        }

        let missing = PRECISION - fraction.len() as u32;
        magnitude = magnitude
            .checked_mul(10u128.pow(missing))
            .ok_or(DecError::Overflow)?;

        let raw = if negative {
            if magnitude > i128::MIN.unsigned_abs() {
                return Err(DecError::Overflow);
            }
            (magnitude as i128).wrapping_neg()
        } else {
            i128::try_from(magnitude).map_err(|_| DecError::Overflow)?
        };
        Ok(Dec(raw))
    }
}

impl FromStr for Dec {
    type Err = DecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dec::parse(s)
    }
}

// Always prints all 18 fractional digits, e.g. "-1.500000000000000000"
impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let one = ONE_RAW as u128;
        let abs = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(
            f,
            "{}.{:0width$}",
            abs / one,
            abs % one,
            width = PRECISION as usize
        )
    }
}
