// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! durfmt-core: Human-readable multi-unit duration formatting

pub mod config;
pub mod decimal;
pub mod duration;
pub mod format;
pub mod formatter;
pub mod number;
pub mod suffix;
pub mod unit;

pub use config::{FormatConfig, NumberConfig, SuffixConfig, SuffixStyle};
pub use decimal::{Decimal, DecimalParseError};
pub use duration::{DurationRangeError, SignedDuration};
pub use format::{ConfigError, DurationFormat, DurationFormatBuilder, RemainderHandling, UnitList};
pub use formatter::{DurationFormatter, Part, PartValue};
pub use number::NumberStyle;
pub use suffix::{
    us_long_suffixes, us_short_suffixes, FixedSuffixes, SingularPlural, UnitSuffixProvider,
};
pub use unit::{TimeUnit, UnitParseError};
