// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generation summaries and collision reporting

use crate::dataset::Dataset;
use crate::error::Result;
use crate::mapping::{Collision, Mappings};
use crate::render::{self, OutputFormat, TableCounts};
use colored::*;
use std::io::Write;

/// Outcome of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary<'a> {
    pub records: usize,
    pub counts: TableCounts,
    pub collisions: Vec<Collision<'a>>,
}

/// Writes both tables for `dataset` to `out` and reports reverse-table
/// overwrites. Collisions are logged, never corrected.
pub fn generate<'a, W: Write>(
    dataset: &'a Dataset,
    format: OutputFormat,
    out: &mut W,
) -> Result<GenerationSummary<'a>> {
    let counts = render::write_tables(dataset, format, out)?;
    let collisions = Mappings::derive(dataset)?.collisions();
    for collision in &collisions {
        tracing::warn!(
            alpha3 = collision.alpha3,
            previous = collision.previous,
            replacement = collision.replacement,
            "three-letter code rebound; the later entry wins"
        );
    }
    tracing::info!(
        records = dataset.len(),
        m2i = counts.m2i,
        i2m = counts.i2m,
        collisions = collisions.len(),
        "generated language mapping tables"
    );
    Ok(GenerationSummary {
        records: dataset.len(),
        counts,
        collisions,
    })
}

pub fn format_collisions(summary: &GenerationSummary) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{}", "REVERSE TABLE COLLISIONS".bold().yellow()));
    if summary.collisions.is_empty() {
        lines.push(format!("  {}", "none".green()));
    } else {
        for (i, collision) in summary.collisions.iter().enumerate() {
            lines.push(format!(
                "  {}. {} {} -> {} (was {})",
                i + 1,
                collision.alpha3.bold(),
                "rebound".red(),
                collision.replacement,
                collision.previous
            ));
        }
    }
    lines.push(format!(
        "  {} records, {} forward entries, {} reverse entries",
        summary.records, summary.counts.m2i, summary.counts.i2m
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LanguageRecord;

    #[test]
    fn generate_reports_counts_and_collisions() {
        colored::control::set_override(false);
        let dataset = Dataset::new(vec![
            LanguageRecord::new("aa", "aaa"),
            LanguageRecord::new("bb", "bbb").with_bibliographic("aaa"),
        ]);
        let mut out = Vec::new();
        let summary = generate(&dataset, OutputFormat::Js, &mut out).unwrap();
        assert_eq!(summary.records, 2);
        assert_eq!(summary.counts, TableCounts { m2i: 2, i2m: 3 });
        assert_eq!(summary.collisions.len(), 1);

        // Both entries are still rendered; the literal resolves to the later one.
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  aaa: 'aa',\n  bbb: 'bb',\n  aaa: 'bb',\n"));

        let listing = format_collisions(&summary);
        assert!(listing.contains("1. aaa rebound -> bb (was aa)"));
    }

    #[test]
    fn clean_dataset_lists_no_collisions() {
        colored::control::set_override(false);
        let dataset = Dataset::new(vec![LanguageRecord::new("en", "eng")]);
        let summary = generate(&dataset, OutputFormat::Js, &mut Vec::new()).unwrap();
        assert!(summary.collisions.is_empty());
        assert!(format_collisions(&summary).contains("none"));
    }
}
