// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit suffix providers.
//!
//! Formatting 243 minutes as hours and minutes needs a suffix for 4 (hours)
//! and one for 3 (minutes). A provider picks those suffixes, e.g. `"h"` and
//! `"m"`, or `" hours"` and `" minutes"`.

use crate::decimal::Decimal;
use crate::unit::TimeUnit;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Picks the suffix for a part value of a given unit.
///
/// The formatter calls [`suffix_for_int`](Self::suffix_for_int) when the
/// value is an integer that fits in an `i64`, and
/// [`suffix_for_decimal`](Self::suffix_for_decimal) otherwise. For values
/// representable both ways, the two must agree.
///
/// `None` means the provider has no suffix for that unit.
pub trait UnitSuffixProvider: fmt::Debug + Send + Sync {
    fn suffix_for_int(&self, unit: TimeUnit, magnitude: i64) -> Option<&str>;

    fn suffix_for_decimal(&self, unit: TimeUnit, magnitude: &Decimal) -> Option<&str>;
}

impl<P: UnitSuffixProvider + ?Sized> UnitSuffixProvider for Arc<P> {
    fn suffix_for_int(&self, unit: TimeUnit, magnitude: i64) -> Option<&str> {
        (**self).suffix_for_int(unit, magnitude)
    }

    fn suffix_for_decimal(&self, unit: TimeUnit, magnitude: &Decimal) -> Option<&str> {
        (**self).suffix_for_decimal(unit, magnitude)
    }
}

impl<P: UnitSuffixProvider + ?Sized> UnitSuffixProvider for Box<P> {
    fn suffix_for_int(&self, unit: TimeUnit, magnitude: i64) -> Option<&str> {
        (**self).suffix_for_int(unit, magnitude)
    }

    fn suffix_for_decimal(&self, unit: TimeUnit, magnitude: &Decimal) -> Option<&str> {
        (**self).suffix_for_decimal(unit, magnitude)
    }
}

/// The same suffix for every magnitude of a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedSuffixes {
    suffixes: HashMap<TimeUnit, String>,
}

impl FixedSuffixes {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = (TimeUnit, S)>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(|(u, s)| (u, s.into())).collect(),
        }
    }

    fn get(&self, unit: TimeUnit) -> Option<&str> {
        self.suffixes.get(&unit).map(String::as_str)
    }
}

impl UnitSuffixProvider for FixedSuffixes {
    fn suffix_for_int(&self, unit: TimeUnit, _magnitude: i64) -> Option<&str> {
        self.get(unit)
    }

    fn suffix_for_decimal(&self, unit: TimeUnit, _magnitude: &Decimal) -> Option<&str> {
        self.get(unit)
    }
}

/// A singular suffix when the magnitude is exactly one, plural otherwise.
///
/// With `negative_one_is_singular`, a magnitude of exactly minus one is
/// singular too. Magnitudes compare by value, so `1.000` is singular.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingularPlural {
    singular: HashMap<TimeUnit, String>,
    plural: HashMap<TimeUnit, String>,
    negative_one_is_singular: bool,
}

impl SingularPlural {
    pub fn new<I, J, S, T>(singular: I, plural: J) -> Self
    where
        I: IntoIterator<Item = (TimeUnit, S)>,
        J: IntoIterator<Item = (TimeUnit, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            singular: singular.into_iter().map(|(u, s)| (u, s.into())).collect(),
            plural: plural.into_iter().map(|(u, s)| (u, s.into())).collect(),
            negative_one_is_singular: false,
        }
    }

    pub fn negative_one_is_singular(mut self, enabled: bool) -> Self {
        self.negative_one_is_singular = enabled;
        self
    }

    fn get(&self, unit: TimeUnit, singular: bool) -> Option<&str> {
        let map = if singular {
            &self.singular
        } else {
            &self.plural
        };
        map.get(&unit).map(String::as_str)
    }
}

impl UnitSuffixProvider for SingularPlural {
    fn suffix_for_int(&self, unit: TimeUnit, magnitude: i64) -> Option<&str> {
        let singular = magnitude == 1 || (self.negative_one_is_singular && magnitude == -1);
        self.get(unit, singular)
    }

    fn suffix_for_decimal(&self, unit: TimeUnit, magnitude: &Decimal) -> Option<&str> {
        let singular = match magnitude.to_i64() {
            Some(1) => true,
            Some(-1) => self.negative_one_is_singular,
            _ => false,
        };
        self.get(unit, singular)
    }
}

/// Abbreviated US suffixes such as `"µs"` and `"m"`, for every unit except
/// half-days.
pub fn us_short_suffixes() -> FixedSuffixes {
    FixedSuffixes::new([
        (TimeUnit::Nanosecond, "ns"),
        (TimeUnit::Microsecond, "µs"),
        (TimeUnit::Millisecond, "ms"),
        (TimeUnit::Second, "s"),
        (TimeUnit::Minute, "m"),
        (TimeUnit::Hour, "h"),
        (TimeUnit::Day, "d"),
        (TimeUnit::Week, "w"),
        (TimeUnit::Month, "mo"),
        (TimeUnit::Year, "y"),
        (TimeUnit::Decade, "dec"),
        (TimeUnit::Century, "c"),
        (TimeUnit::Millennium, "ky"),
    ])
}

/// Spelled-out US suffixes with a leading space: `" second"` / `" seconds"`.
pub fn us_long_suffixes() -> SingularPlural {
    let names = [
        (TimeUnit::Nanosecond, "nanosecond", "nanoseconds"),
        (TimeUnit::Microsecond, "microsecond", "microseconds"),
        (TimeUnit::Millisecond, "millisecond", "milliseconds"),
        (TimeUnit::Second, "second", "seconds"),
        (TimeUnit::Minute, "minute", "minutes"),
        (TimeUnit::Hour, "hour", "hours"),
        (TimeUnit::HalfDay, "half-day", "half-days"),
        (TimeUnit::Day, "day", "days"),
        (TimeUnit::Week, "week", "weeks"),
        (TimeUnit::Month, "month", "months"),
        (TimeUnit::Year, "year", "years"),
        (TimeUnit::Decade, "decade", "decades"),
        (TimeUnit::Century, "century", "centuries"),
        (TimeUnit::Millennium, "millennium", "millennia"),
    ];
    SingularPlural::new(
        names.iter().map(|&(u, one, _)| (u, format!(" {}", one))),
        names.iter().map(|&(u, _, many)| (u, format!(" {}", many))),
    )
}

#[cfg(test)]
#[path = "suffix_tests.rs"]
mod tests;
