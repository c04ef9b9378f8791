// SPDX-License-Identifier: PMPL-1.0-or-later

//! Table rendering for generated source files

use crate::dataset::Dataset;
use crate::error::Result;
use crate::mapping;
use clap::ValueEnum;
use std::io::Write;
use std::path::Path;

/// Two-letter to three-letter table.
pub const M2I_TABLE: &str = "LANG_MAPPING_M2I_EXT";
/// Three-letter (terminological and bibliographic) to two-letter table.
pub const I2M_TABLE: &str = "LANG_MAPPING_I2M_EXT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `export const NAME = { en: 'eng', ... }`
    #[default]
    Js,
    /// `pub static NAME: &[(&str, &str)] = &[("en", "eng"), ...];`
    ///
    /// Colliding three-letter keys are all listed, in input order. Search the
    /// reverse slice from the end (`.iter().rev().find(..)`) to get the same
    /// binding the JS object literal resolves to.
    Rust,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "js" | "javascript" | "mjs" => Some(OutputFormat::Js),
            "rust" | "rs" => Some(OutputFormat::Rust),
            _ => None,
        }
    }

    /// Infers the format from an output file name, e.g. `tables.rs`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    fn open(&self, name: &str) -> String {
        match self {
            OutputFormat::Js => format!("export const {} = {{", name),
            OutputFormat::Rust => format!("pub static {}: &[(&str, &str)] = &[", name),
        }
    }

    fn entry(&self, key: &str, value: &str) -> String {
        match self {
            // Keys stay bare: every code is a plain lowercase identifier.
            OutputFormat::Js => format!("  {}: '{}',", key, value),
            OutputFormat::Rust => format!("    ({:?}, {:?}),", key, value),
        }
    }

    fn close(&self) -> &'static str {
        match self {
            OutputFormat::Js => "}",
            OutputFormat::Rust => "];",
        }
    }
}

/// Entry counts of a completed render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub m2i: usize,
    pub i2m: usize,
}

/// Streams both tables to `out`, one line per entry.
///
/// Lines are written as records are visited; if a record lacks its primary
/// code the error is returned and whatever preceded it stays in `out`.
pub fn write_tables<W: Write>(
    dataset: &Dataset,
    format: OutputFormat,
    out: &mut W,
) -> Result<TableCounts> {
    let m2i = write_table(out, format, M2I_TABLE, mapping::two_to_three(dataset))?;
    let i2m = write_table(out, format, I2M_TABLE, mapping::three_to_two(dataset))?;
    Ok(TableCounts { m2i, i2m })
}

pub fn render_to_string(dataset: &Dataset, format: OutputFormat) -> Result<String> {
    let mut buffer = Vec::new();
    write_tables(dataset, format, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_table<'a, W, I>(out: &mut W, format: OutputFormat, name: &str, entries: I) -> Result<usize>
where
    W: Write,
    I: Iterator<Item = Result<(&'a str, &'a str)>>,
{
    writeln!(out, "{}", format.open(name))?;
    let mut count = 0;
    for entry in entries {
        let (key, value) = entry?;
        writeln!(out, "{}", format.entry(key, value))?;
        count += 1;
    }
    writeln!(out, "{}", format.close())?;
    // Two empty lines after each table.
    writeln!(out)?;
    writeln!(out)?;
    tracing::debug!(table = name, entries = count, "rendered table");
    Ok(count)
}
