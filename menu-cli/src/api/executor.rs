//! Capability seam for executing SQL batches remotely.

use anyhow::Result;
use async_trait::async_trait;

/// Something that can execute a newline-joined batch of SQL statements.
///
/// The batching loop only needs the success/error outcome; whatever the
/// backing service returns beyond that is ignored.
#[async_trait]
pub trait SqlBatchExecutor {
    async fn exec_sql(&self, query: &str) -> Result<()>;
}
