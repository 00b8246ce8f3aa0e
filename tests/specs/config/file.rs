//! Config file specs
//!
//! Verify that TOML format configs are loaded and layered under flags.

use crate::prelude::*;

const DAYS_AND_HOURS: &str = r#"
largest = "day"
smallest = "hour"
delimiter = " + "
"#;

#[test]
fn config_flag_loads_file() {
    let dir = ConfigDir::empty();
    let path = dir.file("format.toml", DAYS_AND_HOURS);
    cli()
        .args(&["--config", path.to_str().unwrap(), "--unit", "m", "1530"])
        .passes()
        .stdout_eq("1d + 1h\n");
}

#[test]
fn config_env_var_loads_file() {
    let dir = ConfigDir::empty();
    let path = dir.file("format.toml", DAYS_AND_HOURS);
    cli()
        .args(&["--unit", "h", "49"])
        .env("DURFMT_CONFIG", &path)
        .passes()
        .stdout_eq("2d + 1h\n");
}

#[test]
fn flags_override_config_file() {
    let dir = ConfigDir::empty();
    let path = dir.file("format.toml", DAYS_AND_HOURS);
    cli()
        .args(&[
            "--config",
            path.to_str().unwrap(),
            "--delimiter",
            " ",
            "--unit",
            "h",
            "49",
        ])
        .passes()
        .stdout_eq("2d 1h\n");
}

#[test]
fn zero_unit_defaults_to_smallest_usable() {
    let dir = ConfigDir::empty();
    let path = dir.file("format.toml", DAYS_AND_HOURS);
    cli()
        .args(&["--config", path.to_str().unwrap(), "0"])
        .passes()
        .stdout_eq("0h\n");
}

#[test]
fn singular_plural_tables() {
    let dir = ConfigDir::empty();
    let path = dir.file(
        "format.toml",
        r#"
largest = "hour"
smallest = "minute"

[suffixes]
style = "singular_plural"
singular = { hour = " Stunde", minute = " Minute" }
plural = { hour = " Stunden", minute = " Minuten" }
"#,
    );
    cli()
        .args(&["--config", path.to_str().unwrap(), "--unit", "m", "61", "122"])
        .passes()
        .stdout_eq("1 Stunde 1 Minute\n2 Stunden 2 Minuten\n");
}

#[test]
fn zero_unit_outside_range_is_rejected() {
    let dir = ConfigDir::empty();
    let path = dir.file("format.toml", "zero_unit = \"second\"\n");
    cli()
        .args(&["--config", path.to_str().unwrap(), "--largest", "m", "--smallest", "m", "1"])
        .fails()
        .stderr_has("Error: Zero duration unit SECONDS is not one of the usable units (MINUTES)");
}

#[test]
fn invalid_config_file_is_reported() {
    let dir = ConfigDir::empty();
    let path = dir.file("format.toml", "colour = \"red\"\n");
    cli()
        .args(&["--config", path.to_str().unwrap(), "1"])
        .fails()
        .stderr_has("Error: invalid format config");
}

#[test]
fn empty_env_var_falls_back_to_defaults() {
    cli()
        .args(&["1370"])
        .env("DURFMT_CONFIG", "")
        .passes()
        .stdout_eq("1s 370ms\n")
        .stderr_has("DURFMT_CONFIG is set but empty");
}
