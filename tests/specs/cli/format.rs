//! Formatting specs
//!
//! Verify the rendered text for common amounts and flag combinations.

use crate::prelude::*;

#[test]
fn milliseconds_by_default() {
    cli()
        .args(&["17", "1370", "2521370223"])
        .passes()
        .stdout_eq("17ms\n1s 370ms\n4w 1d 4h 22m 50s 223ms\n");
}

#[test]
fn zero_renders_in_seconds() {
    cli().args(&["0"]).passes().stdout_eq("0s\n");
}

#[test]
fn negative_amount_signs_first_part_only() {
    cli()
        .args(&["--unit", "s", "-90000"])
        .passes()
        .stdout_eq("-1d 1h\n");
}

#[test]
fn smallest_unit_with_fraction_digits() {
    cli()
        .args(&["--smallest", "s", "--digits", "2", "1375", "1365"])
        .passes()
        .stdout_eq("1.38s\n1.36s\n");
}

#[test]
fn round_half_even_on_whole_units() {
    cli()
        .args(&["--smallest", "s", "--round", "1500", "2500", "2501"])
        .passes()
        .stdout_eq("2s\n2s\n3s\n");
}

#[test]
fn truncates_by_default() {
    cli()
        .args(&["--smallest", "s", "1999"])
        .passes()
        .stdout_eq("1s\n");
}

#[test]
fn long_suffixes_and_custom_delimiter() {
    cli()
        .args(&["--long", "--delimiter", ", ", "--unit", "s", "3661"])
        .passes()
        .stdout_eq("1 hour, 1 minute, 1 second\n");
}

#[test]
fn largest_unit_caps_output() {
    cli()
        .args(&["--largest", "h", "--unit", "d", "2"])
        .passes()
        .stdout_eq("48h\n");
}
