//! Execute queued price updates against Supabase in batches.

use std::fs;

use anyhow::{Context, Result};
use colored::*;

use crate::api::{SupabaseClient, SupabaseConfig};
use crate::menu::batch::{DEFAULT_BATCH_SIZE, execute_in_batches, filter_update_statements};

/// File the generator's output is persisted to between the two steps.
pub const UPDATES_FILE: &str = "remaining_updates.sql";

/// Run every UPDATE line of [`UPDATES_FILE`] through the `exec_sql` RPC in
/// batches, then print success and error totals.
///
/// Missing credentials or a missing statement file are fatal; a failed
/// batch is reported and counted but the run continues, and the process
/// still exits 0.
pub async fn handle_execute_command() -> Result<()> {
    let config = SupabaseConfig::from_env()?;
    let client = SupabaseClient::new(config);

    let content = fs::read_to_string(UPDATES_FILE)
        .with_context(|| format!("Failed to read statement file: {}", UPDATES_FILE))?;
    let statements = filter_update_statements(&content);

    println!("Total UPDATE statements to execute: {}", statements.len());

    let report = execute_in_batches(&client, &statements, DEFAULT_BATCH_SIZE).await;

    println!("\nSummary:");
    println!("{} Success: {}", "✓".green(), report.success_count);
    println!("{} Errors: {}", "✗".red(), report.error_count);

    Ok(())
}
