//! Job service endpoints
//!
//! Client for the data platform's job API: submitting runs, fetching run
//! state, and listing recent runs.

use reqwest::Client;
use runwatch_core::domain::run::JobRun;
use runwatch_core::dto::run::{StartRun, StartedRun};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::{handle_response, with_bearer};

/// HTTP client for the job service API
#[derive(Debug, Clone)]
pub struct JobServiceClient {
    /// Base URL of the job service (e.g., "http://localhost:8080")
    base_url: String,
    /// Bearer token, when the service requires one
    token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl JobServiceClient {
    /// Create a new job service client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the job service API
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client: Client::new(),
        }
    }

    /// Create a new job service client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
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

    /// Get the base URL of the job service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a new run for a named job
    ///
    /// The request carries a client-generated token so a resubmitted
    /// request cannot start the run twice. A submission the service
    /// rejects surfaces as an API error.
    ///
    /// # Arguments
    /// * `job` - The job name
    /// * `arguments` - Arguments handed to the run
    ///
    /// # Returns
    /// The service-assigned run id
    pub async fn start_run(
        &self,
        job: &str,
        arguments: HashMap<String, String>,
    ) -> Result<StartedRun> {
        let url = format!("{}/api/jobs/{}/runs", self.base_url, job);
        let req = StartRun {
            arguments,
            request_token: Uuid::new_v4().to_string(),
        };

        debug!("Submitting run for job '{}'", job);
        let response = with_bearer(self.client.post(&url), self.token.as_deref())
            .json(&req)
            .send()
            .await?;

        handle_response(response).await
    }

    /// Fetch the current state of a run
    ///
    /// # Arguments
    /// * `job` - The job name
    /// * `run_id` - The run id returned by submission
    pub async fn get_run(&self, job: &str, run_id: &str) -> Result<JobRun> {
        let url = format!("{}/api/jobs/{}/runs/{}", self.base_url, job, run_id);
        let response = with_bearer(self.client.get(&url), self.token.as_deref())
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(format!(
                "run {} of job '{}'",
                run_id, job
            )));
        }

        handle_response(response).await
    }

    /// List recent runs for a job, newest first
    pub async fn list_runs(&self, job: &str) -> Result<Vec<JobRun>> {
        let url = format!("{}/api/jobs/{}/runs", self.base_url, job);
        let response = with_bearer(self.client.get(&url), self.token.as_deref())
            .send()
            .await?;

        handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = JobServiceClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = JobServiceClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = JobServiceClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_bearer_token_is_stored() {
        let client = JobServiceClient::new("http://localhost:8080").bearer_token("secret");
        assert_eq!(client.token.as_deref(), Some("secret"));
    }
}
