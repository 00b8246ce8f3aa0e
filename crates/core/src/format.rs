// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validated, immutable duration format configuration.

use crate::decimal::Decimal;
use crate::duration::SignedDuration;
use crate::formatter::DurationFormatter;
use crate::number::NumberStyle;
use crate::suffix::{us_long_suffixes, us_short_suffixes, UnitSuffixProvider};
use crate::unit::TimeUnit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Magnitudes every usable unit must have a suffix for.
const SAMPLE_MAGNITUDES: [i64; 5] = [-2, -1, 0, 1, 2];

/// What to do with the amount left below the smallest usable unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderHandling {
    /// Drop the remainder.
    #[default]
    Truncate,
    /// Round to the nearest value at the configured precision, ties to even.
    RoundHalfEven,
}

/// Errors raised while building a [`DurationFormat`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid range of units: smallest is {smallest}, largest is {largest}")]
    InvalidUnitRange {
        smallest: TimeUnit,
        largest: TimeUnit,
    },

    #[error("no usable units between {smallest} and {largest} after suppressing {suppressed}")]
    NoUsableUnits {
        smallest: TimeUnit,
        largest: TimeUnit,
        suppressed: UnitList,
    },

    #[error("missing unit suffixes for {0}")]
    MissingSuffixes(UnitList),

    #[error("Zero duration unit {unit} is not one of the usable units ({usable})")]
    ZeroUnitNotUsable { unit: TimeUnit, usable: UnitList },

    #[error("the number of fractional digits must be nonnegative, got {0}")]
    NegativeFractionalDigits(i32),

    #[error("failed to read format config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid format config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown {kind}: {value}")]
    UnknownName { kind: &'static str, value: String },
}

/// Comma-separated unit names for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitList(pub Vec<TimeUnit>);

impl fmt::Display for UnitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("nothing");
        }
        for (i, unit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}

/// How durations are rendered: which units, their suffixes, the numeric
/// style, delimiter, precision, and remainder policy.
///
/// Only obtainable through [`DurationFormatBuilder::build`], so every value
/// has passed validation. Cloning is cheap and values are safe to share
/// between threads.
#[derive(Clone)]
pub struct DurationFormat {
    suffix_provider: Arc<dyn UnitSuffixProvider>,
    part_delimiter: String,
    number_style: NumberStyle,
    largest_unit: TimeUnit,
    smallest_unit: TimeUnit,
    suppressed_units: BTreeSet<TimeUnit>,
    fractional_digits: u32,
    remainder_handling: RemainderHandling,
    unit_for_zero_duration: TimeUnit,
    /// Usable units, shortest first.
    units: Vec<TimeUnit>,
}

impl fmt::Debug for DurationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DurationFormat")
            .field("units", &self.units)
            .field("part_delimiter", &self.part_delimiter)
            .field("fractional_digits", &self.fractional_digits)
            .field("remainder_handling", &self.remainder_handling)
            .field("unit_for_zero_duration", &self.unit_for_zero_duration)
            .field("suffix_provider", &self.suffix_provider)
            .finish_non_exhaustive()
    }
}

/// Formats are equal when they share the same suffix provider instance and
/// every other setting matches.
impl PartialEq for DurationFormat {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.suffix_provider, &other.suffix_provider)
            && self.part_delimiter == other.part_delimiter
            && self.number_style == other.number_style
            && self.largest_unit == other.largest_unit
            && self.smallest_unit == other.smallest_unit
            && self.suppressed_units == other.suppressed_units
            && self.fractional_digits == other.fractional_digits
            && self.remainder_handling == other.remainder_handling
            && self.unit_for_zero_duration == other.unit_for_zero_duration
    }
}

impl DurationFormat {
    pub fn builder() -> DurationFormatBuilder {
        DurationFormatBuilder::default()
    }

    /// A builder pre-filled with this format's settings.
    pub fn to_builder(&self) -> DurationFormatBuilder {
        DurationFormatBuilder {
            suffix_provider: Some(Arc::clone(&self.suffix_provider)),
            part_delimiter: Some(self.part_delimiter.clone()),
            number_style: Some(self.number_style.clone()),
            largest_unit: Some(self.largest_unit),
            smallest_unit: Some(self.smallest_unit),
            suppressed_units: self.suppressed_units.clone(),
            fractional_digits: self.fractional_digits as i32,
            remainder_handling: self.remainder_handling,
            unit_for_zero_duration: Some(self.unit_for_zero_duration),
        }
    }

    /// US short suffixes, nanoseconds through years, no fractions.
    ///
    /// 60 seconds formats as `"1m"`, 3601 seconds as `"1h 0m 1s"`, and 8
    /// days as `"1w 1d"`.
    pub fn us_default() -> Self {
        Self {
            suffix_provider: Arc::new(us_short_suffixes()),
            part_delimiter: " ".to_string(),
            number_style: NumberStyle::us(),
            largest_unit: TimeUnit::Year,
            smallest_unit: TimeUnit::Nanosecond,
            suppressed_units: BTreeSet::from([TimeUnit::HalfDay]),
            fractional_digits: 0,
            remainder_handling: RemainderHandling::Truncate,
            unit_for_zero_duration: TimeUnit::Second,
            units: usable_units(
                TimeUnit::Nanosecond,
                TimeUnit::Year,
                &BTreeSet::from([TimeUnit::HalfDay]),
            ),
        }
    }

    /// Like [`us_default`](Self::us_default) with spelled-out singular and
    /// plural suffixes: `"1 day 2 hours"`.
    pub fn us_long() -> Self {
        Self {
            suffix_provider: Arc::new(us_long_suffixes()),
            ..Self::us_default()
        }
    }

    pub fn suffix_provider(&self) -> &dyn UnitSuffixProvider {
        self.suffix_provider.as_ref()
    }

    pub fn part_delimiter(&self) -> &str {
        &self.part_delimiter
    }

    pub fn number_style(&self) -> &NumberStyle {
        &self.number_style
    }

    pub fn largest_unit(&self) -> TimeUnit {
        self.largest_unit
    }

    pub fn smallest_unit(&self) -> TimeUnit {
        self.smallest_unit
    }

    pub fn suppressed_units(&self) -> &BTreeSet<TimeUnit> {
        &self.suppressed_units
    }

    pub fn fractional_digits(&self) -> u32 {
        self.fractional_digits
    }

    pub fn remainder_handling(&self) -> RemainderHandling {
        self.remainder_handling
    }

    pub fn unit_for_zero_duration(&self) -> TimeUnit {
        self.unit_for_zero_duration
    }

    /// Usable units, shortest first.
    pub fn units(&self) -> &[TimeUnit] {
        &self.units
    }

    /// Usable units, longest first.
    pub fn units_descending(&self) -> impl Iterator<Item = TimeUnit> + '_ {
        self.units.iter().rev().copied()
    }

    /// The smallest unit that actually appears in output.
    pub fn smallest_usable_unit(&self) -> TimeUnit {
        self.units.first().copied().unwrap_or(self.smallest_unit)
    }

    /// Shorthand for `DurationFormatter::new(self.clone()).format(duration)`.
    pub fn format(&self, duration: SignedDuration) -> String {
        DurationFormatter::new(self.clone()).format(duration)
    }
}

/// Accumulates format settings; [`build`](Self::build) validates them all.
///
/// Defaults: half-days suppressed, zero fractional digits, truncation. The
/// suffix provider, delimiter, numeric style, unit range, and zero-duration
/// unit are required.
#[derive(Clone)]
pub struct DurationFormatBuilder {
    suffix_provider: Option<Arc<dyn UnitSuffixProvider>>,
    part_delimiter: Option<String>,
    number_style: Option<NumberStyle>,
    largest_unit: Option<TimeUnit>,
    smallest_unit: Option<TimeUnit>,
    suppressed_units: BTreeSet<TimeUnit>,
    fractional_digits: i32,
    remainder_handling: RemainderHandling,
    unit_for_zero_duration: Option<TimeUnit>,
}

impl Default for DurationFormatBuilder {
    fn default() -> Self {
        Self {
            suffix_provider: None,
            part_delimiter: None,
            number_style: None,
            largest_unit: None,
            smallest_unit: None,
            suppressed_units: BTreeSet::from([TimeUnit::HalfDay]),
            fractional_digits: 0,
            remainder_handling: RemainderHandling::Truncate,
            unit_for_zero_duration: None,
        }
    }
}

impl fmt::Debug for DurationFormatBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DurationFormatBuilder")
            .field("largest_unit", &self.largest_unit)
            .field("smallest_unit", &self.smallest_unit)
            .field("suppressed_units", &self.suppressed_units)
            .field("fractional_digits", &self.fractional_digits)
            .field("remainder_handling", &self.remainder_handling)
            .field("unit_for_zero_duration", &self.unit_for_zero_duration)
            .finish_non_exhaustive()
    }
}

impl DurationFormatBuilder {
    pub fn suffix_provider(mut self, provider: impl UnitSuffixProvider + 'static) -> Self {
        self.suffix_provider = Some(Arc::new(provider));
        self
    }

    /// Use a provider that is already shared with other formats.
    pub fn shared_suffix_provider(mut self, provider: Arc<dyn UnitSuffixProvider>) -> Self {
        self.suffix_provider = Some(provider);
        self
    }

    pub fn part_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.part_delimiter = Some(delimiter.into());
        self
    }

    pub fn number_style(mut self, style: NumberStyle) -> Self {
        self.number_style = Some(style);
        self
    }

    pub fn largest_unit(mut self, unit: TimeUnit) -> Self {
        self.largest_unit = Some(unit);
        self
    }

    pub fn smallest_unit(mut self, unit: TimeUnit) -> Self {
        self.smallest_unit = Some(unit);
        self
    }

    /// Units that never appear in output even when inside the range.
    /// Replaces the default of `{HalfDay}`.
    pub fn suppressed_units(mut self, units: impl IntoIterator<Item = TimeUnit>) -> Self {
        self.suppressed_units = units.into_iter().collect();
        self
    }

    /// Maximum fractional digits shown on the smallest usable unit.
    pub fn fractional_digits(mut self, digits: i32) -> Self {
        self.fractional_digits = digits;
        self
    }

    pub fn remainder_handling(mut self, handling: RemainderHandling) -> Self {
        self.remainder_handling = handling;
        self
    }

    pub fn unit_for_zero_duration(mut self, unit: TimeUnit) -> Self {
        self.unit_for_zero_duration = Some(unit);
        self
    }

    pub fn build(self) -> Result<DurationFormat, ConfigError> {
        let suffix_provider = self
            .suffix_provider
            .ok_or(ConfigError::MissingField("suffix_provider"))?;
        let part_delimiter = self
            .part_delimiter
            .ok_or(ConfigError::MissingField("part_delimiter"))?;
        let number_style = self
            .number_style
            .ok_or(ConfigError::MissingField("number_style"))?;
        let largest_unit = self
            .largest_unit
            .ok_or(ConfigError::MissingField("largest_unit"))?;
        let smallest_unit = self
            .smallest_unit
            .ok_or(ConfigError::MissingField("smallest_unit"))?;
        let unit_for_zero_duration = self
            .unit_for_zero_duration
            .ok_or(ConfigError::MissingField("unit_for_zero_duration"))?;

        if smallest_unit.as_nanos() > largest_unit.as_nanos() {
            return Err(ConfigError::InvalidUnitRange {
                smallest: smallest_unit,
                largest: largest_unit,
            });
        }

        let units = usable_units(smallest_unit, largest_unit, &self.suppressed_units);
        if units.is_empty() {
            return Err(ConfigError::NoUsableUnits {
                smallest: smallest_unit,
                largest: largest_unit,
                suppressed: UnitList(self.suppressed_units.iter().copied().collect()),
            });
        }

        let unsuffixed: Vec<TimeUnit> = units
            .iter()
            .copied()
            .filter(|&unit| !has_sample_suffixes(suffix_provider.as_ref(), unit))
            .collect();
        if !unsuffixed.is_empty() {
            return Err(ConfigError::MissingSuffixes(UnitList(unsuffixed)));
        }

        if !units.contains(&unit_for_zero_duration) {
            return Err(ConfigError::ZeroUnitNotUsable {
                unit: unit_for_zero_duration,
                usable: UnitList(units),
            });
        }

        let fractional_digits = u32::try_from(self.fractional_digits)
            .map_err(|_| ConfigError::NegativeFractionalDigits(self.fractional_digits))?;

        tracing::debug!(
            units = %UnitList(units.clone()),
            fractional_digits,
            remainder = ?self.remainder_handling,
            "built duration format"
        );

        Ok(DurationFormat {
            suffix_provider,
            part_delimiter,
            number_style,
            largest_unit,
            smallest_unit,
            suppressed_units: self.suppressed_units,
            fractional_digits,
            remainder_handling: self.remainder_handling,
            unit_for_zero_duration,
            units,
        })
    }
}

fn usable_units(
    smallest: TimeUnit,
    largest: TimeUnit,
    suppressed: &BTreeSet<TimeUnit>,
) -> Vec<TimeUnit> {
    TimeUnit::range(smallest, largest)
        .into_iter()
        .filter(|unit| !suppressed.contains(unit))
        .collect()
}

fn has_sample_suffixes(provider: &dyn UnitSuffixProvider, unit: TimeUnit) -> bool {
    SAMPLE_MAGNITUDES.iter().all(|&m| {
        provider.suffix_for_int(unit, m).is_some()
            && provider.suffix_for_decimal(unit, &Decimal::from(m)).is_some()
    })
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
