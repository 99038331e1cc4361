//! Issue tracker endpoints

use reqwest::Client;
use runwatch_core::dto::ticket::{CreateTicket, CreatedTicket};
use tracing::debug;

use crate::error::Result;
use crate::{handle_response, with_bearer};

/// HTTP client for the issue tracker API
#[derive(Debug, Clone)]
pub struct TrackerClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl TrackerClient {
    /// Create a new tracker client
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client: Client::new(),
        }
    }

    /// Create a new tracker client with a custom HTTP client
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

    /// Get the base URL of the tracker
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Open a defect ticket
    ///
    /// # Arguments
    /// * `req` - Project key, title, and body of the ticket
    ///
    /// # Returns
    /// The tracker-assigned ticket key
    pub async fn create_ticket(&self, req: CreateTicket) -> Result<CreatedTicket> {
        let url = format!("{}/api/tickets", self.base_url);

        debug!("Creating ticket in project '{}'", req.project);
        let response = with_bearer(self.client.post(&url), self.token.as_deref())
            .json(&req)
            .send()
            .await?;

        handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = TrackerClient::new("http://localhost:8082/");
        assert_eq!(client.base_url(), "http://localhost:8082");
    }
}
