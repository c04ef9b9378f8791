// SPDX-License-Identifier: PMPL-1.0-or-later

//! iso639-mapgen: emit ISO 639-1 <-> ISO 639-2 lookup tables
//!
//! Reads `iso_639-1.json` from the working directory by default and prints the
//! generated tables to stdout, ready for redirection into a source file.

use anyhow::{Context, Result};
use clap::Parser;
use iso639_mapgen::dataset::{Dataset, DEFAULT_DATASET_PATH};
use iso639_mapgen::render::OutputFormat;
use iso639_mapgen::report;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "iso639-mapgen")]
#[command(version)]
#[command(about = "Generate ISO 639-1 <-> ISO 639-2 language code lookup tables")]
#[command(long_about = None)]
struct Cli {
    /// ISO 639-1 dataset (JSON, or YAML by extension)
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DATASET_PATH)]
    input: PathBuf,

    /// Write tables to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output syntax [default: inferred from --output, else js]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print reverse-table collisions to stderr after generating
    #[arg(long)]
    collisions: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) -> Result<()> {
    // -v always wins; otherwise RUST_LOG, falling back to warnings only.
    let filter = if verbose {
        EnvFilter::try_new("iso639_mapgen=debug")?
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new("iso639_mapgen=warn")?,
        }
    };
    // stdout carries the generated tables; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let dataset = Dataset::load(&cli.input)
        .with_context(|| format!("loading language dataset {}", cli.input.display()))?;

    let format = cli
        .format
        .or_else(|| cli.output.as_deref().and_then(OutputFormat::from_path))
        .unwrap_or_default();
    tracing::debug!(?format, input = %cli.input.display(), "generating tables");

    let summary = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let summary = report::generate(&dataset, format, &mut writer)
                .context("generating language mapping tables")?;
            writer
                .flush()
                .with_context(|| format!("writing output file {}", path.display()))?;
            summary
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let summary = report::generate(&dataset, format, &mut handle)
                .context("generating language mapping tables")?;
            handle.flush().context("flushing stdout")?;
            summary
        }
    };

    if cli.collisions {
        eprintln!("{}", report::format_collisions(&summary));
    }

    Ok(())
}
