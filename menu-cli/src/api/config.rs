//! Credential configuration for the Supabase service.

use std::env;

use anyhow::{Result, bail};

/// Environment variable holding the project base URL.
pub const SUPABASE_URL_VAR: &str = "VITE_SUPABASE_URL";
/// Environment variable holding the service-role secret key.
pub const SERVICE_ROLE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Validated Supabase credentials, resolved once at startup.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub service_role_key: String,
}

impl SupabaseConfig {
    /// Read credentials from the environment. Both variables must be
    /// present and non-empty; otherwise the run fails before any work.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            env::var(SUPABASE_URL_VAR).ok(),
            env::var(SERVICE_ROLE_KEY_VAR).ok(),
        )
    }

    fn from_values(url: Option<String>, service_role_key: Option<String>) -> Result<Self> {
        let url = url.filter(|v| !v.trim().is_empty());
        let service_role_key = service_role_key.filter(|v| !v.trim().is_empty());

        match (url, service_role_key) {
            (Some(url), Some(service_role_key)) => Ok(Self {
                url,
                service_role_key,
            }),
            _ => bail!("Missing SUPABASE_URL or SERVICE_KEY environment variables"),
        }
    }
}
