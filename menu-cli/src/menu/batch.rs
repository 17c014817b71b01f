//! Filtering, batching, and sequential execution of UPDATE statements.

use colored::*;

use crate::api::SqlBatchExecutor;

/// Statements submitted per `exec_sql` call.
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// Select the lines of a statement file that are UPDATE statements.
///
/// Comment lines, blank lines, and the trailing count are dropped; the only
/// rule is "line, trimmed, starts with `UPDATE`".
pub fn filter_update_statements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("UPDATE"))
        .map(str::to_string)
        .collect()
}

/// Aggregate outcome of a batched run.
///
/// Counters move in whole batches: the remote service may have applied part
/// of a failed batch, but that accounting is its concern, not ours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub success_count: usize,
    pub error_count: usize,
}

/// Execute statements in fixed-size batches, strictly in order.
///
/// Each batch is joined with newlines and submitted as one call. A failed
/// batch is counted and reported, never retried, and never stops the run.
pub async fn execute_in_batches(
    executor: &dyn SqlBatchExecutor,
    statements: &[String],
    batch_size: usize,
) -> ExecutionReport {
    let total = statements.len();
    let mut report = ExecutionReport::default();

    for (index, batch) in statements.chunks(batch_size).enumerate() {
        let payload = batch.join("\n");

        match executor.exec_sql(&payload).await {
            Ok(()) => {
                report.success_count += batch.len();
                println!(
                    "{} Executed batch {}: {} updates (Total: {}/{})",
                    "✓".green(),
                    index + 1,
                    batch.len(),
                    report.success_count,
                    total
                );
            }
            Err(e) => {
                report.error_count += batch.len();
                println!("{} Error in batch {}: {:#}", "✗".red(), index + 1, e);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::{Result, bail};
    use async_trait::async_trait;

    use super::*;

    /// Fake executor that records payloads and fails the batch indexes it
    /// was told to.
    struct FakeExecutor {
        fail_batches: Vec<usize>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeExecutor {
        fn new(fail_batches: Vec<usize>) -> Self {
            Self {
                fail_batches,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn payloads(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SqlBatchExecutor for FakeExecutor {
        async fn exec_sql(&self, query: &str) -> Result<()> {
            let mut calls = self.calls.lock().unwrap();
            let index = calls.len();
            calls.push(query.to_string());
            if self.fail_batches.contains(&index) {
                bail!("relation \"items\" does not exist");
            }
            Ok(())
        }
    }

    fn statements(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| format!("UPDATE items SET price = {} WHERE names->>'en' = 'Item {}';", i, i))
            .collect()
    }

    #[test]
    fn test_filter_keeps_only_update_lines() {
        let content = "-- SQL UPDATE statements generated from Final Menu CSV\n\
                       -- Run these in Supabase SQL editor\n\
                       \n\
                       UPDATE items SET price = 45 WHERE names->>'en' = 'Shawarma';\n\
                       \n\
                       UPDATE items SET price = 20 WHERE names->>'ar' = 'حمص';\n\
                       \n\
                       -- Total UPDATE statements: 2\n";

        let filtered = filter_update_statements(content);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.starts_with("UPDATE")));
    }

    #[test]
    fn test_filter_trims_before_matching() {
        let filtered = filter_update_statements("   UPDATE items SET price = 1;   \nSELECT 1;\n");
        assert_eq!(
            filtered,
            vec!["UPDATE items SET price = 1;".to_string()]
        );
    }

    #[tokio::test]
    async fn test_batches_preserve_order_and_sizes() {
        let executor = FakeExecutor::new(vec![]);
        let stmts = statements(45);

        let report = execute_in_batches(&executor, &stmts, DEFAULT_BATCH_SIZE).await;

        let payloads = executor.payloads();
        assert_eq!(payloads.len(), 3);
        assert_eq!(payloads[0].lines().count(), 20);
        assert_eq!(payloads[1].lines().count(), 20);
        assert_eq!(payloads[2].lines().count(), 5);
        assert!(payloads[0].lines().next().unwrap().contains("'Item 0'"));
        assert!(payloads[2].lines().last().unwrap().contains("'Item 44'"));
        assert_eq!(report.success_count, 45);
        assert_eq!(report.error_count, 0);
    }

    #[tokio::test]
    async fn test_failed_batch_does_not_abort_the_run() {
        // 45 statements, second batch fails: 25 succeed, 20 error out.
        let executor = FakeExecutor::new(vec![1]);
        let stmts = statements(45);

        let report = execute_in_batches(&executor, &stmts, DEFAULT_BATCH_SIZE).await;

        assert_eq!(executor.payloads().len(), 3);
        assert_eq!(report.success_count, 25);
        assert_eq!(report.error_count, 20);
    }

    #[tokio::test]
    async fn test_counts_partition_the_statement_total() {
        let executor = FakeExecutor::new(vec![0, 2]);
        let stmts = statements(50);

        let report = execute_in_batches(&executor, &stmts, DEFAULT_BATCH_SIZE).await;

        assert_eq!(report.success_count + report.error_count, 50);
        assert_eq!(report.error_count, 30);
    }

    #[tokio::test]
    async fn test_no_statements_means_no_calls() {
        let executor = FakeExecutor::new(vec![]);
        let report = execute_in_batches(&executor, &[], DEFAULT_BATCH_SIZE).await;

        assert!(executor.payloads().is_empty());
        assert_eq!(report, ExecutionReport::default());
    }
}
