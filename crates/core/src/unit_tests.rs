// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn all_is_sorted_by_length() {
    for pair in TimeUnit::ALL.windows(2) {
        assert!(pair[0].as_nanos() < pair[1].as_nanos(), "{:?}", pair);
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn index_matches_position_in_all() {
    for (i, unit) in TimeUnit::ALL.iter().enumerate() {
        assert_eq!(unit.index(), i);
    }
    assert_eq!(TimeUnit::Minute.index(), 4);
    assert_eq!(TimeUnit::Day.index(), 7);
}

#[yare::parameterized(
    nanosecond  = { TimeUnit::Nanosecond,  1 },
    millisecond = { TimeUnit::Millisecond, 1_000_000 },
    second      = { TimeUnit::Second,      1_000_000_000 },
    hour        = { TimeUnit::Hour,        3_600_000_000_000 },
    half_day    = { TimeUnit::HalfDay,     43_200_000_000_000 },
    month       = { TimeUnit::Month,       2_592_000_000_000_000 },
    year        = { TimeUnit::Year,        31_536_000_000_000_000 },
    millennium  = { TimeUnit::Millennium,  31_536_000_000_000_000_000 },
)]
fn nanosecond_lengths(unit: TimeUnit, nanos: i128) {
    assert_eq!(unit.as_nanos(), nanos);
}

#[test]
fn range_with_same_endpoints_returns_one_unit() {
    assert_eq!(
        TimeUnit::range(TimeUnit::Day, TimeUnit::Day),
        vec![TimeUnit::Day]
    );
}

#[test]
fn range_is_ascending_for_either_argument_order() {
    let expected = vec![
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];
    assert_eq!(TimeUnit::range(TimeUnit::Day, TimeUnit::Year), expected);
    assert_eq!(TimeUnit::range(TimeUnit::Year, TimeUnit::Day), expected);
}

#[test]
fn full_range_covers_catalog() {
    let all = TimeUnit::range(TimeUnit::Nanosecond, TimeUnit::Millennium);
    assert_eq!(all, TimeUnit::ALL.to_vec());
}

#[yare::parameterized(
    short_ms    = { "ms",        TimeUnit::Millisecond },
    micro_sign  = { "µs",        TimeUnit::Microsecond },
    ascii_micro = { "us",        TimeUnit::Microsecond },
    snake_case  = { "half_day",  TimeUnit::HalfDay },
    plural      = { "weeks",     TimeUnit::Week },
    upper       = { "YEAR",      TimeUnit::Year },
    month_short = { "mo",        TimeUnit::Month },
    padded      = { " minute ",  TimeUnit::Minute },
)]
fn parse_unit_names(input: &str, expected: TimeUnit) {
    assert_eq!(input.parse::<TimeUnit>().unwrap(), expected);
}

#[test]
fn parse_unknown_unit_fails() {
    let err = "fortnight".parse::<TimeUnit>().unwrap_err();
    assert_eq!(err.to_string(), "unknown time unit: fortnight");
}

#[test]
fn display_uses_upper_case_name() {
    assert_eq!(TimeUnit::Second.to_string(), "SECONDS");
    assert_eq!(TimeUnit::HalfDay.to_string(), "HALF_DAYS");
}

#[test]
fn serde_uses_snake_case() {
    let json = serde_json::to_string(&TimeUnit::HalfDay).unwrap();
    assert_eq!(json, "\"half_day\"");
    let unit: TimeUnit = serde_json::from_str("\"millisecond\"").unwrap();
    assert_eq!(unit, TimeUnit::Millisecond);
}
