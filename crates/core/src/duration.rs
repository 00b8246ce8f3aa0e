// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signed durations with nanosecond resolution.

use crate::unit::TimeUnit;
use std::ops::Neg;
use std::time::Duration;
use thiserror::Error;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Returned when a value does not fit in a [`SignedDuration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("duration out of range")]
pub struct DurationRangeError;

/// A signed span of time: whole seconds plus a nanosecond adjustment.
///
/// Normalized so that `nanos` is always in `0..1_000_000_000` and the sign
/// lives in `secs`; -1.5s is stored as `secs = -2, nanos = 500_000_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SignedDuration {
    secs: i64,
    nanos: u32,
}

impl SignedDuration {
    pub const ZERO: SignedDuration = SignedDuration { secs: 0, nanos: 0 };

    /// Largest representable duration.
    pub const MAX: SignedDuration = SignedDuration {
        secs: i64::MAX,
        nanos: 999_999_999,
    };

    /// Smallest (most negative) representable duration.
    pub const MIN: SignedDuration = SignedDuration {
        secs: i64::MIN,
        nanos: 0,
    };

    /// Build from seconds plus a nanosecond adjustment of either sign.
    ///
    /// Saturates at [`MIN`](Self::MIN) / [`MAX`](Self::MAX).
    pub fn new(secs: i64, nanos: i64) -> Self {
        Self::from_nanos(i128::from(secs) * i128::from(NANOS_PER_SECOND) + i128::from(nanos))
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self { secs, nanos: 0 }
    }

    pub fn from_millis(millis: i64) -> Self {
        Self::from_nanos(i128::from(millis) * 1_000_000)
    }

    pub fn from_micros(micros: i64) -> Self {
        Self::from_nanos(i128::from(micros) * 1_000)
    }

    /// Build from a total nanosecond count, saturating outside the
    /// representable range.
    pub fn from_nanos(nanos: i128) -> Self {
        let per_sec = i128::from(NANOS_PER_SECOND);
        let secs = nanos.div_euclid(per_sec);
        let rem = nanos.rem_euclid(per_sec);
        match i64::try_from(secs) {
            Ok(secs) => Self {
                secs,
                nanos: rem as u32,
            },
            Err(_) if nanos < 0 => Self::MIN,
            Err(_) => Self::MAX,
        }
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self::from_nanos(i128::from(minutes) * TimeUnit::Minute.as_nanos())
    }

    pub fn from_hours(hours: i64) -> Self {
        Self::from_nanos(i128::from(hours) * TimeUnit::Hour.as_nanos())
    }

    pub fn from_days(days: i64) -> Self {
        Self::from_nanos(i128::from(days) * TimeUnit::Day.as_nanos())
    }

    /// `amount` of `unit`, or an error if the result is out of range.
    pub fn checked_from_units(amount: i64, unit: TimeUnit) -> Result<Self, DurationRangeError> {
        let total = i128::from(amount)
            .checked_mul(unit.as_nanos())
            .ok_or(DurationRangeError)?;
        if total < Self::MIN.as_nanos() || total > Self::MAX.as_nanos() {
            return Err(DurationRangeError);
        }
        Ok(Self::from_nanos(total))
    }

    pub const fn secs(&self) -> i64 {
        self.secs
    }

    /// Nanosecond adjustment, always non-negative.
    pub const fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    pub const fn is_zero(&self) -> bool {
        self.secs == 0 && self.nanos == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.secs < 0
    }

    /// Total length in nanoseconds, exact for every representable value.
    pub const fn as_nanos(&self) -> i128 {
        self.secs as i128 * NANOS_PER_SECOND as i128 + self.nanos as i128
    }

    /// Absolute value, saturating for [`MIN`](Self::MIN).
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -*self
        } else {
            *self
        }
    }
}

impl Neg for SignedDuration {
    type Output = SignedDuration;

    /// Saturates for [`SignedDuration::MIN`].
    fn neg(self) -> Self::Output {
        Self::from_nanos(-self.as_nanos())
    }
}

impl TryFrom<Duration> for SignedDuration {
    type Error = DurationRangeError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        let secs = i64::try_from(value.as_secs()).map_err(|_| DurationRangeError)?;
        Ok(Self {
            secs,
            nanos: value.subsec_nanos(),
        })
    }
}

impl From<SignedDuration> for i128 {
    fn from(value: SignedDuration) -> Self {
        value.as_nanos()
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
