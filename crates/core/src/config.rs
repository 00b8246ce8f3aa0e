// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML description of a [`DurationFormat`].
//!
//! Every field is optional; anything left out keeps the value from
//! [`DurationFormat::us_default`].
//!
//! ```toml
//! largest = "week"
//! smallest = "second"
//! fractional_digits = 2
//! remainder = "round_half_even"
//!
//! [suffixes]
//! style = "long"
//!
//! [number]
//! preset = "german"
//! ```

use crate::format::{ConfigError, DurationFormat, RemainderHandling};
use crate::number::NumberStyle;
use crate::suffix::{us_long_suffixes, us_short_suffixes, FixedSuffixes, SingularPlural};
use crate::unit::TimeUnit;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Serializable format settings, applied on top of the US defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub largest: Option<TimeUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smallest: Option<TimeUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppressed: Option<Vec<TimeUnit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fractional_digits: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remainder: Option<RemainderHandling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero_unit: Option<TimeUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffixes: Option<SuffixConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<NumberConfig>,
}

/// Which suffix provider to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixStyle {
    /// `"ns"`, `"ms"`, `"h"`, ...
    #[default]
    Short,
    /// `" second"` / `" seconds"`, ...
    Long,
    /// Explicit per-unit suffixes from `fixed`.
    Fixed,
    /// Explicit `singular` and `plural` tables.
    SingularPlural,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuffixConfig {
    #[serde(default)]
    pub style: SuffixStyle,
    #[serde(default)]
    pub negative_one_is_singular: bool,
    /// Unit name to suffix, e.g. `second = "s"`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub fixed: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub singular: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub plural: HashMap<String, String>,
}

/// Resolve the unit names of a suffix table.
fn unit_table(table: &HashMap<String, String>) -> Result<Vec<(TimeUnit, String)>, ConfigError> {
    table
        .iter()
        .map(|(name, suffix)| {
            let unit = name.parse::<TimeUnit>().map_err(|_| ConfigError::UnknownName {
                kind: "time unit",
                value: name.clone(),
            })?;
            Ok((unit, suffix.clone()))
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Group separator; an empty string disables grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minus: Option<String>,
}

impl NumberConfig {
    fn to_style(&self) -> Result<NumberStyle, ConfigError> {
        let mut style = match self.preset.as_deref() {
            None | Some("us") => NumberStyle::us(),
            Some("plain") => NumberStyle::plain(),
            Some("german") => NumberStyle::german(),
            Some("french") => NumberStyle::french(),
            Some("arabic_indic") => NumberStyle::arabic_indic(),
            Some(other) => {
                return Err(ConfigError::UnknownName {
                    kind: "number preset",
                    value: other.to_string(),
                })
            }
        };
        match self.grouping.as_deref() {
            Some("") => style = style.without_grouping(),
            Some(sep) => style = style.with_grouping_separator(sep),
            None => {}
        }
        if let Some(decimal) = &self.decimal {
            style = style.with_decimal_separator(decimal.as_str());
        }
        if let Some(minus) = &self.minus {
            style = style.with_minus_sign(minus.as_str());
        }
        Ok(style)
    }
}

impl FormatConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded format config");
        Ok(config)
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: FormatConfig) -> FormatConfig {
        FormatConfig {
            largest: other.largest.or(self.largest),
            smallest: other.smallest.or(self.smallest),
            suppressed: other.suppressed.or(self.suppressed),
            delimiter: other.delimiter.or(self.delimiter),
            fractional_digits: other.fractional_digits.or(self.fractional_digits),
            remainder: other.remainder.or(self.remainder),
            zero_unit: other.zero_unit.or(self.zero_unit),
            suffixes: other.suffixes.or(self.suffixes),
            number: other.number.or(self.number),
        }
    }

    /// Validate and build the format.
    ///
    /// When `zero_unit` is not given, seconds are used if usable, otherwise
    /// the smallest usable unit.
    pub fn build(&self) -> Result<DurationFormat, ConfigError> {
        let defaults = DurationFormat::us_default();
        let mut builder = defaults.to_builder();

        if let Some(largest) = self.largest {
            builder = builder.largest_unit(largest);
        }
        if let Some(smallest) = self.smallest {
            builder = builder.smallest_unit(smallest);
        }
        if let Some(suppressed) = &self.suppressed {
            builder = builder.suppressed_units(suppressed.iter().copied());
        }
        if let Some(delimiter) = &self.delimiter {
            builder = builder.part_delimiter(delimiter.as_str());
        }
        if let Some(digits) = self.fractional_digits {
            builder = builder.fractional_digits(digits);
        }
        if let Some(remainder) = self.remainder {
            builder = builder.remainder_handling(remainder);
        }
        if let Some(suffixes) = &self.suffixes {
            builder = match suffixes.style {
                SuffixStyle::Short => builder.suffix_provider(us_short_suffixes()),
                SuffixStyle::Long => builder.suffix_provider(
                    us_long_suffixes().negative_one_is_singular(suffixes.negative_one_is_singular),
                ),
                SuffixStyle::Fixed => {
                    builder.suffix_provider(FixedSuffixes::new(unit_table(&suffixes.fixed)?))
                }
                SuffixStyle::SingularPlural => builder.suffix_provider(
                    SingularPlural::new(
                        unit_table(&suffixes.singular)?,
                        unit_table(&suffixes.plural)?,
                    )
                    .negative_one_is_singular(suffixes.negative_one_is_singular),
                ),
            };
        }
        if let Some(number) = &self.number {
            builder = builder.number_style(number.to_style()?);
        }

        let zero_unit = match self.zero_unit {
            Some(unit) => unit,
            None => self.default_zero_unit(&defaults),
        };
        builder.unit_for_zero_duration(zero_unit).build()
    }

    fn default_zero_unit(&self, defaults: &DurationFormat) -> TimeUnit {
        let smallest = self.smallest.unwrap_or(defaults.smallest_unit());
        let largest = self.largest.unwrap_or(defaults.largest_unit());
        let suppressed = self
            .suppressed
            .clone()
            .unwrap_or_else(|| defaults.suppressed_units().iter().copied().collect());
        let usable: Vec<TimeUnit> = TimeUnit::range(smallest, largest)
            .into_iter()
            .filter(|u| !suppressed.contains(u))
            .collect();
        if usable.contains(&TimeUnit::Second) {
            TimeUnit::Second
        } else {
            usable.first().copied().unwrap_or(smallest)
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
