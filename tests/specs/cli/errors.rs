//! CLI error handling specs
//!
//! Verify error messages and exit codes for invalid input.

use crate::prelude::*;

#[test]
fn inverted_unit_range_is_rejected() {
    let run = cli()
        .args(&["--largest", "s", "--smallest", "h", "1"])
        .fails()
        .stderr_eq("Error: invalid range of units: smallest is HOURS, largest is SECONDS\n");
    assert_eq!(run.code(), Some(1));
}

#[test]
fn negative_digits_are_rejected() {
    cli()
        .args(&["--digits", "-1", "1"])
        .fails()
        .stderr_has("Error: the number of fractional digits must be nonnegative, got -1");
}

#[test]
fn unknown_unit_is_a_usage_error() {
    let run = cli()
        .args(&["--unit", "fortnight", "1"])
        .fails()
        .stderr_has("unknown time unit: fortnight");
    assert_eq!(run.code(), Some(2));
}

#[test]
fn overflowing_amount_is_rejected() {
    cli()
        .args(&["--unit", "y", "9223372036854775807"])
        .fails()
        .stderr_has("does not fit in a duration");
}

#[test]
fn missing_config_file_is_reported() {
    cli()
        .args(&["--config", "/nonexistent/durfmt.toml", "1"])
        .fails()
        .stderr_has("Error: failed to read format config /nonexistent/durfmt.toml");
}
