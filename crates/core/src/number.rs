// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locale-style number rendering for part values.

use crate::decimal::Decimal;

const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// How numbers are rendered: digit grouping, separators, and digit glyphs.
///
/// A style is a plain value. Formatting never mutates it; the fractional
/// digit limit is passed per call instead of being stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberStyle {
    grouping_separator: Option<String>,
    grouping_size: usize,
    decimal_separator: String,
    minus_sign: String,
    digits: [char; 10],
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self::us()
    }
}

impl NumberStyle {
    /// `1,234,567.89`
    pub fn us() -> Self {
        Self {
            grouping_separator: Some(",".to_string()),
            grouping_size: 3,
            decimal_separator: ".".to_string(),
            minus_sign: "-".to_string(),
            digits: ASCII_DIGITS,
        }
    }

    /// `1234567.89`
    pub fn plain() -> Self {
        Self {
            grouping_separator: None,
            ..Self::us()
        }
    }

    /// `1.234.567,89`
    pub fn german() -> Self {
        Self {
            grouping_separator: Some(".".to_string()),
            decimal_separator: ",".to_string(),
            ..Self::us()
        }
    }

    /// `1 234 567,89` with a narrow no-break space between groups.
    pub fn french() -> Self {
        Self {
            grouping_separator: Some("\u{202f}".to_string()),
            decimal_separator: ",".to_string(),
            ..Self::us()
        }
    }

    /// `١٬٢٣٤٬٥٦٧٫٨٩`
    pub fn arabic_indic() -> Self {
        Self {
            grouping_separator: Some("\u{066c}".to_string()),
            grouping_size: 3,
            decimal_separator: "\u{066b}".to_string(),
            minus_sign: "-".to_string(),
            digits: ARABIC_INDIC_DIGITS,
        }
    }

    pub fn with_grouping_separator(mut self, separator: impl Into<String>) -> Self {
        self.grouping_separator = Some(separator.into());
        self
    }

    pub fn without_grouping(mut self) -> Self {
        self.grouping_separator = None;
        self
    }

    /// Digits per group; zero disables grouping.
    pub fn with_grouping_size(mut self, size: usize) -> Self {
        self.grouping_size = size;
        self
    }

    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    pub fn with_minus_sign(mut self, sign: impl Into<String>) -> Self {
        self.minus_sign = sign.into();
        self
    }

    /// Glyphs for the digits zero through nine.
    pub fn with_digits(mut self, digits: [char; 10]) -> Self {
        self.digits = digits;
        self
    }

    pub fn grouping_separator(&self) -> Option<&str> {
        self.grouping_separator.as_deref()
    }

    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    /// Render a whole number. `negative` is ignored for a zero magnitude.
    pub fn format_integer(&self, negative: bool, magnitude: u128) -> String {
        let mut out = String::new();
        if negative && magnitude != 0 {
            out.push_str(&self.minus_sign);
        }
        self.push_grouped(&mut out, magnitude);
        out
    }

    /// Render a decimal with no minimum and at most `max_fraction_digits`
    /// fractional digits.
    ///
    /// Digits beyond the limit are dropped, not rounded: callers round the
    /// value first (see [`Decimal::ratio_half_even`]).
    pub fn format_decimal(&self, value: &Decimal, max_fraction_digits: u32) -> String {
        let mut out = String::new();
        if value.is_negative() {
            out.push_str(&self.minus_sign);
        }
        self.push_grouped(&mut out, value.integer_part());

        let limit = (max_fraction_digits as usize).min(value.fraction_digits().len());
        let mut fraction = &value.fraction_digits()[..limit];
        while let [rest @ .., 0] = fraction {
            fraction = rest;
        }
        if !fraction.is_empty() {
            out.push_str(&self.decimal_separator);
            out.extend(fraction.iter().map(|&d| self.glyph(d)));
        }
        out
    }

    fn glyph(&self, digit: u8) -> char {
        self.digits[usize::from(digit % 10)]
    }

    fn push_grouped(&self, out: &mut String, magnitude: u128) {
        let ascii = magnitude.to_string();
        let len = ascii.len();
        for (i, b) in ascii.bytes().enumerate() {
            if i > 0 && self.grouping_size > 0 && (len - i) % self.grouping_size == 0 {
                if let Some(sep) = &self.grouping_separator {
                    out.push_str(sep);
                }
            }
            out.push(self.glyph(b - b'0'));
        }
    }
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;
