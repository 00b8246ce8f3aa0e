// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit catalog: the fixed, ordered set of time units a duration can be
//! broken into.
//!
//! Months and years are fixed-length approximations (30 and 365 days), not
//! calendar arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const YEAR: u64 = 365 * DAY;

/// A unit of time, ordered by length.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    HalfDay,
    Day,
    Week,
    /// 30 days.
    Month,
    /// 365 days.
    Year,
    Decade,
    Century,
    Millennium,
}

/// Error returned when a unit name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time unit: {0}")]
pub struct UnitParseError(pub String);

impl TimeUnit {
    /// Every unit, shortest first.
    pub const ALL: [TimeUnit; 14] = [
        TimeUnit::Nanosecond,
        TimeUnit::Microsecond,
        TimeUnit::Millisecond,
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::HalfDay,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
        TimeUnit::Decade,
        TimeUnit::Century,
        TimeUnit::Millennium,
    ];

    /// Position of this unit in [`TimeUnit::ALL`].
    pub const fn index(self) -> usize {
        match self {
            TimeUnit::Nanosecond => 0,
            TimeUnit::Microsecond => 1,
            TimeUnit::Millisecond => 2,
            TimeUnit::Second => 3,
            TimeUnit::Minute => 4,
            TimeUnit::Hour => 5,
            TimeUnit::HalfDay => 6,
            TimeUnit::Day => 7,
            TimeUnit::Week => 8,
            TimeUnit::Month => 9,
            TimeUnit::Year => 10,
            TimeUnit::Decade => 11,
            TimeUnit::Century => 12,
            TimeUnit::Millennium => 13,
        }
    }

    /// Fixed length of this unit as whole seconds plus a nanosecond remainder.
    pub const fn length(self) -> (u64, u32) {
        match self {
            TimeUnit::Nanosecond => (0, 1),
            TimeUnit::Microsecond => (0, 1_000),
            TimeUnit::Millisecond => (0, 1_000_000),
            TimeUnit::Second => (1, 0),
            TimeUnit::Minute => (MINUTE, 0),
            TimeUnit::Hour => (HOUR, 0),
            TimeUnit::HalfDay => (12 * HOUR, 0),
            TimeUnit::Day => (DAY, 0),
            TimeUnit::Week => (7 * DAY, 0),
            TimeUnit::Month => (30 * DAY, 0),
            TimeUnit::Year => (YEAR, 0),
            TimeUnit::Decade => (10 * YEAR, 0),
            TimeUnit::Century => (100 * YEAR, 0),
            TimeUnit::Millennium => (1000 * YEAR, 0),
        }
    }

    /// Length of this unit in nanoseconds.
    pub const fn as_nanos(self) -> i128 {
        let (secs, nanos) = self.length();
        secs as i128 * NANOS_PER_SECOND + nanos as i128
    }

    /// Upper-case identifier used in diagnostics, e.g. `"SECONDS"`.
    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Nanosecond => "NANOS",
            TimeUnit::Microsecond => "MICROS",
            TimeUnit::Millisecond => "MILLIS",
            TimeUnit::Second => "SECONDS",
            TimeUnit::Minute => "MINUTES",
            TimeUnit::Hour => "HOURS",
            TimeUnit::HalfDay => "HALF_DAYS",
            TimeUnit::Day => "DAYS",
            TimeUnit::Week => "WEEKS",
            TimeUnit::Month => "MONTHS",
            TimeUnit::Year => "YEARS",
            TimeUnit::Decade => "DECADES",
            TimeUnit::Century => "CENTURIES",
            TimeUnit::Millennium => "MILLENNIA",
        }
    }

    /// Inclusive range of units between `a` and `b`, shortest first.
    ///
    /// Argument order does not matter: `range(Day, Year)` and
    /// `range(Year, Day)` both return `[Day, Week, Month, Year]`. Callers
    /// wanting a descending list reverse the result.
    pub fn range(a: TimeUnit, b: TimeUnit) -> Vec<TimeUnit> {
        let (from, to) = if a.index() <= b.index() {
            (a.index(), b.index())
        } else {
            (b.index(), a.index())
        };
        Self::ALL[from..=to].to_vec()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = UnitParseError;

    /// Accepts snake_case names (`"half_day"`), their plurals, and the short
    /// suffixes (`"ms"`, `"mo"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "ns" | "nanosecond" | "nanoseconds" | "nanos" => TimeUnit::Nanosecond,
            "us" | "µs" | "microsecond" | "microseconds" | "micros" => TimeUnit::Microsecond,
            "ms" | "millisecond" | "milliseconds" | "millis" => TimeUnit::Millisecond,
            "s" | "sec" | "second" | "seconds" => TimeUnit::Second,
            "m" | "min" | "minute" | "minutes" => TimeUnit::Minute,
            "h" | "hour" | "hours" => TimeUnit::Hour,
            "half_day" | "half_days" | "half-day" => TimeUnit::HalfDay,
            "d" | "day" | "days" => TimeUnit::Day,
            "w" | "week" | "weeks" => TimeUnit::Week,
            "mo" | "month" | "months" => TimeUnit::Month,
            "y" | "year" | "years" => TimeUnit::Year,
            "decade" | "decades" => TimeUnit::Decade,
            "century" | "centuries" => TimeUnit::Century,
            "millennium" | "millennia" => TimeUnit::Millennium,
            _ => return Err(UnitParseError(s.to_string())),
        };
        Ok(unit)
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
