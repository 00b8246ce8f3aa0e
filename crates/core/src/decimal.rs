// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exact signed decimal values.
//!
//! Part values of the smallest unit can carry fractional digits, and whole
//! part values can exceed `i64`. Both are represented as a [`Decimal`] so that
//! suffix selection and rendering never go through floating point.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU128;
use std::str::FromStr;
use thiserror::Error;

/// An exact decimal number: sign, integer part, and fractional digits.
///
/// The representation is normalized (no trailing fractional zeros, zero is
/// never negative), so equality is equality of mathematical value:
/// `1` and `1.000` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    negative: bool,
    integer: u128,
    /// Fractional digits, most significant first, each in `0..=9`.
    fraction: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal: {0}")]
pub struct DecimalParseError(pub String);

impl Decimal {
    pub const ZERO: Decimal = Decimal {
        negative: false,
        integer: 0,
        fraction: Vec::new(),
    };

    fn normalized(negative: bool, integer: u128, mut fraction: Vec<u8>) -> Self {
        while fraction.last() == Some(&0) {
            fraction.pop();
        }
        let negative = negative && (integer != 0 || !fraction.is_empty());
        Self {
            negative,
            integer,
            fraction,
        }
    }

    pub fn from_int(value: i128) -> Self {
        Self::normalized(value < 0, value.unsigned_abs(), Vec::new())
    }

    /// Exact value of `numerator / denominator`, rounded half-to-even to at
    /// most `digits` fractional digits.
    ///
    /// Uses long division on the remainder, so no intermediate value is ever
    /// scaled by a power of ten and any digit count is safe.
    pub fn ratio_half_even(numerator: i128, denominator: NonZeroU128, digits: u32) -> Self {
        let d = denominator.get();
        let n = numerator.unsigned_abs();
        let mut integer = n / d;
        let mut rem = n % d;

        let mut fraction = Vec::with_capacity(digits as usize);
        for _ in 0..digits {
            let (digit, next) = times_ten_div_rem(rem, d);
            fraction.push(digit);
            rem = next;
        }

        // rem / d against one half, compared without doubling `rem`
        let round_up = match rem.cmp(&(d - rem)) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => {
                let last = fraction.last().map_or((integer % 2) as u8, |&digit| digit);
                last % 2 == 1
            }
        };
        if round_up {
            let mut carry = true;
            for digit in fraction.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                integer += 1;
            }
        }

        Self::normalized(numerator < 0, integer, fraction)
    }

    pub fn is_zero(&self) -> bool {
        self.integer == 0 && self.fraction.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_integer(&self) -> bool {
        self.fraction.is_empty()
    }

    /// Magnitude of the integer part.
    pub fn integer_part(&self) -> u128 {
        self.integer
    }

    /// Fractional digits, most significant first, without trailing zeros.
    pub fn fraction_digits(&self) -> &[u8] {
        &self.fraction
    }

    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    /// The value as an `i64`, if it is integral and in range.
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        if self.negative {
            let magnitude = i128::try_from(self.integer).ok()?;
            i64::try_from(-magnitude).ok()
        } else {
            i64::try_from(self.integer).ok()
        }
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.integer.cmp(&other.integer).then_with(|| {
            let len = self.fraction.len().max(other.fraction.len());
            let digit = |f: &[u8], i: usize| f.get(i).copied().unwrap_or(0);
            (0..len)
                .map(|i| digit(&self.fraction, i).cmp(&digit(&other.fraction, i)))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// `(floor(10 * rem / d), (10 * rem) % d)` for `rem < d`, without computing
/// `10 * rem`.
fn times_ten_div_rem(rem: u128, d: u128) -> (u8, u128) {
    let gap = d - rem;
    let mut acc = 0u128;
    let mut digit = 0u8;
    for _ in 0..10 {
        if acc >= gap {
            acc -= gap;
            digit += 1;
        } else {
            acc += rem;
        }
    }
    (digit, acc)
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::from_int(i128::from(value))
    }
}

impl From<i128> for Decimal {
    fn from(value: i128) -> Self {
        Self::from_int(value)
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.integer)?;
        if !self.fraction.is_empty() {
            f.write_str(".")?;
            for digit in &self.fraction {
                write!(f, "{}", digit)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Decimal {
    type Err = DecimalParseError;

    /// Parses plain `[-+]digits[.digits]` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DecimalParseError(s.to_string());
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (int_str, frac_str) = body.split_once('.').unwrap_or((body, ""));
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(invalid());
        }
        let integer = if int_str.is_empty() {
            0
        } else if int_str.bytes().all(|b| b.is_ascii_digit()) {
            int_str.parse::<u128>().map_err(|_| invalid())?
        } else {
            return Err(invalid());
        };
        let fraction = frac_str
            .bytes()
            .map(|b| b.is_ascii_digit().then(|| b - b'0'))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(invalid)?;
        Ok(Self::normalized(negative, integer, fraction))
    }
}

#[cfg(test)]
#[path = "decimal_tests.rs"]
mod tests;
