//! HTTP client for the Supabase REST API.
//!
//! Database functions are exposed through PostgREST at
//! `POST {base}/rest/v1/rpc/{function}`, authenticated with the service-role
//! key as both the `apikey` header and a bearer token.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::config::SupabaseConfig;
use super::executor::SqlBatchExecutor;

/// Parameters of the `exec_sql` database function.
#[derive(Debug, Serialize)]
struct ExecSqlParams<'a> {
    query: &'a str,
}

/// Minimal Supabase client: service-role authenticated RPC calls.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn rpc_url(&self, function: &str) -> String {
        format!(
            "{}/rest/v1/rpc/{}",
            self.config.url.trim_end_matches('/'),
            function
        )
    }

    /// Call a database function and return its JSON response, if any.
    pub async fn rpc<T: Serialize + ?Sized>(&self, function: &str, params: &T) -> Result<Value> {
        let url = self.rpc_url(function);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.service_role_key)
            .bearer_auth(&self.config.service_role_key)
            .json(params)
            .send()
            .await
            .with_context(|| format!("rpc {} request failed", function))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("rpc {} failed ({}): {}", function, status, body.trim());
        }

        let body = response.text().await.unwrap_or_default();
        if body.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .with_context(|| format!("rpc {} returned invalid JSON", function))
    }
}

#[async_trait]
impl SqlBatchExecutor for SupabaseClient {
    async fn exec_sql(&self, query: &str) -> Result<()> {
        self.rpc("exec_sql", &ExecSqlParams { query }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> SupabaseClient {
        SupabaseClient::new(SupabaseConfig {
            url: url.to_string(),
            service_role_key: "service-role-key".to_string(),
        })
    }

    #[test]
    fn test_rpc_url_joins_base_and_function() {
        assert_eq!(
            client("https://abc.supabase.co").rpc_url("exec_sql"),
            "https://abc.supabase.co/rest/v1/rpc/exec_sql"
        );
    }

    #[test]
    fn test_rpc_url_tolerates_trailing_slash() {
        assert_eq!(
            client("https://abc.supabase.co/").rpc_url("exec_sql"),
            "https://abc.supabase.co/rest/v1/rpc/exec_sql"
        );
    }

    #[test]
    fn test_exec_sql_params_serialize_under_query_key() {
        let params = ExecSqlParams {
            query: "UPDATE items SET price = 45 WHERE names->>'en' = 'Shawarma';",
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json["query"],
            "UPDATE items SET price = 45 WHERE names->>'en' = 'Shawarma';"
        );
    }
}
