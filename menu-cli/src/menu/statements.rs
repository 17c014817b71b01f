//! SQL UPDATE statement generation for menu price changes.
//!
//! Items in the database carry their names in a JSONB `names` column keyed
//! by language; a spreadsheet row is matched against exactly one of those
//! keys, picked in a fixed priority order.

use super::rows::MenuRow;

/// Language keys of the `names` JSONB column, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Turkish,
    Arabic,
}

impl Language {
    /// JSON key of this language in the `names` column.
    pub fn key(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Turkish => "tr",
            Self::Arabic => "ar",
        }
    }
}

/// Double embedded single quotes so the name is safe inside a SQL string
/// literal.
pub fn escape_name(name: &str) -> String {
    name.replace('\'', "''")
}

/// Pick the name used to match this row against the database: the first
/// non-empty field in English → Turkish → Arabic order. Names populated in
/// lower-priority languages are not used as fallbacks.
pub fn match_name(row: &MenuRow) -> Option<(Language, &str)> {
    let english = row.english_name.trim();
    let turkish = row.turkish_name.trim();
    let arabic = row.arabic_name.trim();

    if !english.is_empty() {
        Some((Language::English, english))
    } else if !turkish.is_empty() {
        Some((Language::Turkish, turkish))
    } else if !arabic.is_empty() {
        Some((Language::Arabic, arabic))
    } else {
        None
    }
}

/// Build the UPDATE statement for one row, or `None` when the row has no
/// price or no usable name.
///
/// The price is inserted verbatim and unquoted; the export is trusted to
/// put numeric-looking text there.
pub fn update_statement(row: &MenuRow) -> Option<String> {
    let price = row.price.trim();
    if price.is_empty() {
        return None;
    }

    let (language, name) = match_name(row)?;
    Some(format!(
        "UPDATE items SET price = {} WHERE names->>'{}' = '{}';",
        price,
        language.key(),
        escape_name(name)
    ))
}
