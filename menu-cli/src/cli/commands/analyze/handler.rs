//! Report what the generator would do with a menu CSV, without emitting SQL.

use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::menu::rows::{MenuRow, read_menu_rows};
use crate::menu::statements::{Language, match_name};

/// Row tallies for one CSV, bucketed the way the generator treats rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CsvSummary {
    pub total: usize,
    pub english_matches: usize,
    pub turkish_matches: usize,
    pub arabic_matches: usize,
    pub missing_price: usize,
    pub unnamed: usize,
}

impl CsvSummary {
    /// Rows that would produce an UPDATE statement.
    pub fn matchable(&self) -> usize {
        self.english_matches + self.turkish_matches + self.arabic_matches
    }
}

/// Tally rows into the generator's buckets. A row lands in exactly one:
/// missing price, matched by language, or priced but nameless.
pub fn summarize_rows(rows: &[MenuRow]) -> CsvSummary {
    let mut summary = CsvSummary::default();

    for row in rows {
        summary.total += 1;

        if row.price.trim().is_empty() {
            summary.missing_price += 1;
            continue;
        }

        match match_name(row) {
            Some((Language::English, _)) => summary.english_matches += 1,
            Some((Language::Turkish, _)) => summary.turkish_matches += 1,
            Some((Language::Arabic, _)) => summary.arabic_matches += 1,
            None => summary.unnamed += 1,
        }
    }

    summary
}

/// Warn about every row the generator would drop for a missing price, then
/// print the overall tallies.
pub fn handle_analyze_command(csv_path: &Path) -> Result<()> {
    let rows = read_menu_rows(csv_path)?;

    for (index, row) in rows.iter().enumerate() {
        if row.price.trim().is_empty() {
            let label = match match_name(row) {
                Some((_, name)) => name.to_string(),
                // Row numbers are 1-based and follow the header line.
                None => format!("row {}", index + 2),
            };
            println!("{} No price: {}", "⚠".yellow(), label);
        }
    }

    let summary = summarize_rows(&rows);

    println!("\nRows: {}", summary.total);
    println!(
        "Would update: {} (en: {}, tr: {}, ar: {})",
        summary.matchable(),
        summary.english_matches,
        summary.turkish_matches,
        summary.arabic_matches
    );
    println!("Skipped, no price: {}", summary.missing_price);
    println!("Skipped, no usable name: {}", summary.unnamed);

    Ok(())
}
