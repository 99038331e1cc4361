//! Log store endpoints
//!
//! Fetches the log events of a run from the log store. Streams are
//! addressed by log group plus stream name; the run id doubles as the
//! stream name.

use reqwest::Client;
use runwatch_core::domain::log::LogEvent;
use runwatch_core::dto::log::LogEventsPage;
use tracing::debug;

use crate::error::Result;
use crate::{handle_response, with_bearer};

/// HTTP client for the log store API
#[derive(Debug, Clone)]
pub struct LogStoreClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl LogStoreClient {
    /// Create a new log store client
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client: Client::new(),
        }
    }

    /// Create a new log store client with a custom HTTP client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client,
        }
    }

    /// Authenticate requests with a bearer token
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL of the log store
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every event in a log stream
    ///
    /// Follows the pagination cursor until the store reports the stream
    /// exhausted, so the result is the complete stream in order.
    ///
    /// # Arguments
    /// * `group` - The log group (e.g., "/jobs/runs")
    /// * `stream` - The stream name within the group
    pub async fn fetch_stream(&self, group: &str, stream: &str) -> Result<Vec<LogEvent>> {
        let url = format!("{}/api/log-events", self.base_url);

        let mut events = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let mut query = vec![("group", group.to_string()), ("stream", stream.to_string())];
            if let Some(token) = &next_token {
                query.push(("next_token", token.clone()));
            }

            let response = with_bearer(self.client.get(&url), self.token.as_deref())
                .query(&query)
                .send()
                .await?;

            let page: LogEventsPage = handle_response(response).await?;
            events.extend(page.events);

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        debug!("Fetched {} event(s) from stream '{}'", events.len(), stream);
        Ok(events)
    }
}
