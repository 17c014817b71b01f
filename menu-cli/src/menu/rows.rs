//! Read menu rows from the spreadsheet CSV export.
//!
//! The export carries its headers in the source language; the four columns
//! this tool cares about are looked up by those names and everything else
//! in the file is ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Arabic item name column.
pub const ARABIC_NAME_COLUMN: &str = "اسم المادة";
/// Turkish name column.
pub const TURKISH_NAME_COLUMN: &str = "الاسم التركي";
/// Latin/English name column.
pub const ENGLISH_NAME_COLUMN: &str = "الاسم اللاتيني";
/// Price column.
pub const PRICE_COLUMN: &str = "السعر";

/// One spreadsheet record. Fields are kept verbatim; trimming happens where
/// the values are interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuRow {
    pub arabic_name: String,
    pub turkish_name: String,
    pub english_name: String,
    pub price: String,
}

/// Read all menu rows from a CSV file.
///
/// A file that lacks any of the expected columns fails the whole run; there
/// is no per-row recovery.
pub fn read_menu_rows<P: AsRef<Path>>(path: P) -> Result<Vec<MenuRow>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open menu CSV: {}", path.display()))?;

    parse_menu_rows(file).with_context(|| format!("Failed to parse menu CSV: {}", path.display()))
}

/// Parse menu rows from anything producing CSV text.
pub fn parse_menu_rows<R: Read>(reader: R) -> Result<Vec<MenuRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("Failed to read CSV headers")?
        .clone();
    // Spreadsheet exports often prefix the first header with a BOM.
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
            .with_context(|| format!("CSV is missing expected column '{}'", name))
    };

    let arabic_col = column(ARABIC_NAME_COLUMN)?;
    let turkish_col = column(TURKISH_NAME_COLUMN)?;
    let english_col = column(ENGLISH_NAME_COLUMN)?;
    let price_col = column(PRICE_COLUMN)?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("Failed to read CSV record")?;
        let field = |col: usize| record.get(col).unwrap_or("").to_string();

        rows.push(MenuRow {
            arabic_name: field(arabic_col),
            turkish_name: field(turkish_col),
            english_name: field(english_col),
            price: field(price_col),
        });
    }

    log::debug!("parsed {} menu rows", rows.len());
    Ok(rows)
}
