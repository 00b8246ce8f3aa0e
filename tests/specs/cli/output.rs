//! Output format specs

use crate::prelude::*;

#[test]
fn json_output_is_an_array_of_records() {
    let run = cli()
        .args(&["-o", "json", "--unit", "s", "0", "-90000"])
        .passes();
    let parsed: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            { "input": 0, "unit": "second", "formatted": "0s" },
            { "input": -90000, "unit": "second", "formatted": "-1d 1h" },
        ])
    );
}

#[test]
fn text_output_is_one_line_per_amount() {
    cli()
        .args(&["-o", "text", "1", "2", "3"])
        .passes()
        .stdout_eq("1ms\n2ms\n3ms\n");
}

#[test]
fn logging_goes_to_stderr() {
    cli()
        .args(&["5"])
        .env("DURFMT_LOG", "debug")
        .passes()
        .stdout_eq("5ms\n")
        .stderr_has("formatting");
}
