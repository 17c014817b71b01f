//! Generate SQL price updates from the menu CSV export.

use std::path::Path;

use anyhow::Result;

use crate::menu::rows::read_menu_rows;
use crate::menu::statements::update_statement;

/// Print one UPDATE statement per matchable CSV row, framed by the comment
/// header and trailing count the Supabase SQL editor workflow expects.
pub fn handle_generate_command(csv_path: &Path) -> Result<()> {
    println!("-- SQL UPDATE statements generated from Final Menu CSV");
    println!("-- Run these in Supabase SQL editor\n");

    let rows = read_menu_rows(csv_path)?;

    let mut count = 0usize;
    for row in &rows {
        if let Some(statement) = update_statement(row) {
            println!("{}", statement);
            count += 1;
        }
    }

    println!("\n-- Total UPDATE statements: {}", count);

    Ok(())
}
