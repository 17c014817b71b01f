//! Supabase configuration and RPC client.

pub mod client;
pub mod config;
pub mod executor;

pub use client::SupabaseClient;
pub use config::SupabaseConfig;
pub use executor::SqlBatchExecutor;
