use crate::domain::{catalog::SampleCatalog, executor::QueryExecutor, models::ResultSet};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Stand-in for a database: waits out a fixed latency, then returns the
/// canned result of the selected sample. The submitted text is ignored.
pub struct SimulatedExecutor {
    catalog: Arc<SampleCatalog>,
    latency: Duration,
}

impl SimulatedExecutor {
    #[must_use]
    pub fn new(catalog: Arc<SampleCatalog>, latency: Duration) -> Self {
        Self { catalog, latency }
    }
}

#[async_trait]
impl QueryExecutor for SimulatedExecutor {
    async fn execute(&self, sample: &str, query: &str) -> Result<ResultSet> {
        tracing::debug!(sample, query_len = query.len(), "simulating query run");
        tokio::time::sleep(self.latency).await;
        self.catalog
            .get(sample)
            .map(|s| s.result.clone())
            .ok_or_else(|| anyhow!("no sample named '{sample}'"))
    }
}
