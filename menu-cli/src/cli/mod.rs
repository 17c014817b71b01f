//! Command-line interface definitions and dispatch targets.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::menu::DEFAULT_MENU_CSV;

#[derive(Parser)]
#[command(
    name = "menu-cli",
    version,
    about = "Utilities for managing menu item prices in Supabase"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate SQL price updates from a menu CSV export
    Generate {
        /// Path to the menu CSV export
        #[arg(default_value = DEFAULT_MENU_CSV)]
        csv: PathBuf,
    },
    /// Execute the UPDATE statements in remaining_updates.sql in batches
    Execute,
    /// Report what `generate` would do with a CSV, without emitting SQL
    Analyze {
        /// Path to the menu CSV export
        #[arg(default_value = DEFAULT_MENU_CSV)]
        csv: PathBuf,
    },
}
