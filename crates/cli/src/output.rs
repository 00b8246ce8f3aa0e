// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use durfmt_core::TimeUnit;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One formatted amount, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedAmount {
    pub input: i64,
    pub unit: TimeUnit,
    pub formatted: String,
}

/// Write the results in text (one line each) or JSON (a single array).
pub fn write_formatted(
    out: &mut impl Write,
    rows: &[FormattedAmount],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for row in rows {
                writeln!(out, "{}", row.formatted)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
