//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_options() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage: durfmt [OPTIONS] <AMOUNTS>...")
        .stdout_has("--largest")
        .stdout_has("--round");
}

#[test]
fn version_prints_package_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_eq(&format!("durfmt {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_amounts_is_a_usage_error() {
    cli().fails().stderr_has("<AMOUNTS>...");
}
