//! Command-line utilities for a Supabase-backed restaurant menu.
//!
//! `generate` turns a menu spreadsheet export into SQL price updates,
//! `execute` pushes a file of those updates through the `exec_sql` RPC in
//! batches, and `analyze` reports what `generate` would do with a CSV.

mod api;
mod cli;
mod menu;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { csv } => cli::commands::generate::handle_generate_command(&csv),
        Commands::Execute => cli::commands::execute::handle_execute_command().await,
        Commands::Analyze { csv } => cli::commands::analyze::handle_analyze_command(&csv),
    }
}
