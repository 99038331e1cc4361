//! Log store access

use anyhow::{Context, Result};
use async_trait::async_trait;
use runwatch_client::LogStoreClient;
use runwatch_core::domain::log::LogEvent;

/// Operations the watcher needs from the log store
#[async_trait]
pub trait RunLogs: Send + Sync {
    /// Fetches the complete log stream of a run
    ///
    /// The run id doubles as the stream name within the group.
    async fn fetch_run_logs(&self, group: &str, stream: &str) -> Result<Vec<LogEvent>>;
}

/// HTTP implementation backed by the log store client
pub struct HttpRunLogs {
    client: LogStoreClient,
}

impl HttpRunLogs {
    pub fn new(client: LogStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RunLogs for HttpRunLogs {
    async fn fetch_run_logs(&self, group: &str, stream: &str) -> Result<Vec<LogEvent>> {
        self.client
            .fetch_stream(group, stream)
            .await
            .context("Failed to fetch run logs")
    }
}
