//! Job service access

use anyhow::{Context, Result};
use async_trait::async_trait;
use runwatch_client::JobServiceClient;
use runwatch_core::domain::run::JobRun;
use std::collections::HashMap;

/// Operations the watcher needs from the job service
#[async_trait]
pub trait RunApi: Send + Sync {
    /// Submits a run for a named job
    ///
    /// # Returns
    /// The service-assigned run id
    async fn start_run(&self, job: &str, arguments: HashMap<String, String>) -> Result<String>;

    /// Fetches the current state of a run
    async fn fetch_run(&self, job: &str, run_id: &str) -> Result<JobRun>;
}

/// HTTP implementation backed by the job service client
pub struct HttpRunApi {
    client: JobServiceClient,
}

impl HttpRunApi {
    pub fn new(client: JobServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RunApi for HttpRunApi {
    async fn start_run(&self, job: &str, arguments: HashMap<String, String>) -> Result<String> {
        let started = self
            .client
            .start_run(job, arguments)
            .await
            .context("Failed to submit job run")?;

        Ok(started.run_id)
    }

    async fn fetch_run(&self, job: &str, run_id: &str) -> Result<JobRun> {
        self.client
            .get_run(job, run_id)
            .await
            .context("Failed to fetch run state")
    }
}
