use super::models::ResultSet;
use anyhow::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    // Resolves the result set shown for `sample`. `query` is the editor text
    // at the moment the run was triggered.
    async fn execute(&self, sample: &str, query: &str) -> Result<ResultSet>;
}
