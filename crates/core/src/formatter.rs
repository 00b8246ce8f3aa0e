// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Breaks a signed duration into unit parts and renders them.
//!
//! All arithmetic is on an exact `i128` nanosecond total, which holds every
//! [`SignedDuration`] with room to spare, so output stays exact for spans of
//! millennia.

use crate::decimal::Decimal;
use crate::duration::SignedDuration;
use crate::format::{DurationFormat, RemainderHandling};
use crate::unit::TimeUnit;
use std::num::NonZeroU128;

/// Value carried by one rendered part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Whole(i128),
    /// Rounded value of the smallest usable unit.
    Fraction(Decimal),
}

/// One `<number><suffix>` token of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub unit: TimeUnit,
    pub value: PartValue,
    pub text: String,
}

/// Formats durations with a fixed [`DurationFormat`].
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone)]
pub struct DurationFormatter {
    format: DurationFormat,
}

impl DurationFormatter {
    pub fn new(format: DurationFormat) -> Self {
        Self { format }
    }

    pub fn format_config(&self) -> &DurationFormat {
        &self.format
    }

    /// Render `duration`, e.g. `"4w 1d 4h 22m 50s"`.
    ///
    /// Total: every duration produces a string for every valid format.
    pub fn format(&self, duration: SignedDuration) -> String {
        let parts = self.decompose(duration);
        let texts: Vec<&str> = parts.iter().map(|p| p.text.as_str()).collect();
        texts.join(self.format.part_delimiter())
    }

    /// The parts [`format`](Self::format) joins, largest unit first.
    ///
    /// Leading zero parts are skipped, trailing parts stop once nothing is
    /// left, and only the first part carries the sign of a negative
    /// duration. A duration that is zero, or that rounds to zero at the
    /// configured precision, yields the single zero part.
    pub fn decompose(&self, duration: SignedDuration) -> Vec<Part> {
        if duration.is_zero() {
            return vec![self.zero_part()];
        }

        let format = &self.format;
        let smallest = format.smallest_usable_unit();
        let fractional = format.fractional_digits() > 0
            || format.remainder_handling() == RemainderHandling::RoundHalfEven;

        let mut remaining = duration.as_nanos();
        let mut parts: Vec<Part> = Vec::new();

        for unit in format.units_descending() {
            let unit_nanos = unit.as_nanos();
            let whole = remaining / unit_nanos;
            let rem = remaining % unit_nanos;
            let is_smallest = unit == smallest;

            if parts.is_empty() && whole == 0 && !is_smallest {
                continue;
            }

            if is_smallest && fractional {
                let value = Decimal::ratio_half_even(
                    remaining,
                    nonzero_nanos(unit),
                    format.fractional_digits(),
                );
                if value.is_zero() && parts.is_empty() {
                    return vec![self.zero_part()];
                }
                parts.push(self.fraction_part(unit, value));
                break;
            }

            parts.push(self.whole_part(unit, whole));

            // Only the first part is signed; the rest count down from it.
            remaining = rem.abs();
            if remaining == 0 {
                break;
            }
        }

        if parts.is_empty() {
            return vec![self.zero_part()];
        }
        parts
    }

    fn zero_part(&self) -> Part {
        let unit = self.format.unit_for_zero_duration();
        let mut text = self.format.number_style().format_integer(false, 0);
        text.push_str(self.int_suffix(unit, 0));
        Part {
            unit,
            value: PartValue::Whole(0),
            text,
        }
    }

    fn whole_part(&self, unit: TimeUnit, whole: i128) -> Part {
        let mut text = self
            .format
            .number_style()
            .format_integer(whole < 0, whole.unsigned_abs());
        let suffix = match i64::try_from(whole) {
            Ok(small) => self.int_suffix(unit, small),
            Err(_) => self.decimal_suffix(unit, &Decimal::from_int(whole)),
        };
        text.push_str(suffix);
        Part {
            unit,
            value: PartValue::Whole(whole),
            text,
        }
    }

    fn fraction_part(&self, unit: TimeUnit, value: Decimal) -> Part {
        let mut text = self
            .format
            .number_style()
            .format_decimal(&value, self.format.fractional_digits());
        text.push_str(self.decimal_suffix(unit, &value));
        Part {
            unit,
            value: PartValue::Fraction(value),
            text,
        }
    }

    fn int_suffix(&self, unit: TimeUnit, magnitude: i64) -> &str {
        self.format
            .suffix_provider()
            .suffix_for_int(unit, magnitude)
            .unwrap_or_default()
    }

    fn decimal_suffix(&self, unit: TimeUnit, magnitude: &Decimal) -> &str {
        self.format
            .suffix_provider()
            .suffix_for_decimal(unit, magnitude)
            .unwrap_or_default()
    }
}

impl From<DurationFormat> for DurationFormatter {
    fn from(format: DurationFormat) -> Self {
        Self::new(format)
    }
}

fn nonzero_nanos(unit: TimeUnit) -> NonZeroU128 {
    NonZeroU128::new(unit.as_nanos().unsigned_abs()).unwrap_or(NonZeroU128::MIN)
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
