// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! durfmt - format durations as human-readable multi-unit text

mod env;
mod output;

use output::{FormattedAmount, OutputFormat};

use anyhow::{Context, Result};
use clap::Parser;
use durfmt_core::{
    DurationFormat, FormatConfig, RemainderHandling, SignedDuration, SuffixConfig, SuffixStyle,
    TimeUnit,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "durfmt",
    version,
    about = "Format durations as human-readable multi-unit text"
)]
struct Cli {
    /// Amounts to format, in --unit
    #[arg(required = true, allow_negative_numbers = true)]
    amounts: Vec<i64>,

    /// Unit of the amounts (ns, us, ms, s, m, h, d, w, mo, y, ...)
    #[arg(short, long, default_value = "ms")]
    unit: TimeUnit,

    /// TOML format config [env: DURFMT_CONFIG]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Largest unit to render
    #[arg(long)]
    largest: Option<TimeUnit>,

    /// Smallest unit to render
    #[arg(long)]
    smallest: Option<TimeUnit>,

    /// Fractional digits on the smallest unit
    #[arg(short, long, allow_negative_numbers = true)]
    digits: Option<i32>,

    /// Round the smallest unit half-even instead of truncating
    #[arg(long)]
    round: bool,

    /// Text placed between parts
    #[arg(long)]
    delimiter: Option<String>,

    /// Spelled-out English suffixes (" second", " hours", ...)
    #[arg(long)]
    long: bool,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,
}

impl Cli {
    /// Format settings given on the command line, layered over the config file.
    fn overrides(&self) -> FormatConfig {
        FormatConfig {
            largest: self.largest,
            smallest: self.smallest,
            delimiter: self.delimiter.clone(),
            fractional_digits: self.digits,
            remainder: self.round.then_some(RemainderHandling::RoundHalfEven),
            suffixes: self.long.then(|| SuffixConfig {
                style: SuffixStyle::Long,
                ..SuffixConfig::default()
            }),
            ..FormatConfig::default()
        }
    }

    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(env::config_path)
    }

    fn duration_format(&self) -> Result<DurationFormat> {
        let base = match self.config_path() {
            Some(path) => FormatConfig::load(&path)?,
            None => FormatConfig::default(),
        };
        Ok(base.merge(self.overrides()).build()?)
    }
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.duration_format()?;
    let rows = format_amounts(&format, &cli.amounts, cli.unit)?;
    output::write_formatted(&mut std::io::stdout().lock(), &rows, cli.output)
}

fn format_amounts(
    format: &DurationFormat,
    amounts: &[i64],
    unit: TimeUnit,
) -> Result<Vec<FormattedAmount>> {
    amounts
        .iter()
        .map(|&input| {
            let duration = SignedDuration::checked_from_units(input, unit)
                .with_context(|| format!("{} {} does not fit in a duration", input, unit))?;
            tracing::debug!(input, %unit, "formatting");
            Ok(FormattedAmount {
                input,
                unit,
                formatted: format.format(duration),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
