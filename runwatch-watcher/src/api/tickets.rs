//! Issue tracker access

use anyhow::{Context, Result};
use async_trait::async_trait;
use runwatch_client::TrackerClient;
use runwatch_core::dto::ticket::CreateTicket;

/// Operations the watcher needs from the issue tracker
#[async_trait]
pub trait DefectSink: Send + Sync {
    /// Files a defect ticket
    ///
    /// # Returns
    /// The tracker-assigned ticket key
    async fn file_defect(&self, ticket: CreateTicket) -> Result<String>;
}

/// HTTP implementation backed by the tracker client
pub struct HttpDefectSink {
    client: TrackerClient,
}

impl HttpDefectSink {
    pub fn new(client: TrackerClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DefectSink for HttpDefectSink {
    async fn file_defect(&self, ticket: CreateTicket) -> Result<String> {
        let created = self
            .client
            .create_ticket(ticket)
            .await
            .context("Failed to create defect ticket")?;

        Ok(created.key)
    }
}
