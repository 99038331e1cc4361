//! Runwatch HTTP Clients
//!
//! Typed HTTP clients for the three services the watcher talks to: the
//! data platform's job service, its log store, and the issue tracker.
//!
//! One struct per service, sharing response handling and error types, so
//! the watcher and the CLI drive the same code paths.
//!
//! # Example
//!
//! ```no_run
//! use runwatch_client::JobServiceClient;
//! use std::collections::HashMap;
//!
//! # async fn example() -> runwatch_client::Result<()> {
//! let client = JobServiceClient::new("http://localhost:8080");
//!
//! let started = client.start_run("nightly-etl", HashMap::new()).await?;
//! println!("Run id: {}", started.run_id);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod jobs;
mod logs;
mod tickets;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use jobs::JobServiceClient;
pub use logs::LogStoreClient;
pub use tickets::TrackerClient;

use serde::de::DeserializeOwned;

/// Handle an API response and deserialize JSON
///
/// Checks the status code and returns an appropriate error if the request
/// failed, or deserializes the response body if successful.
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(
            status.as_u16(),
            extract_message(&error_text),
        ));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::Parse(format!("Failed to parse JSON response: {}", e)))
}

/// Pull the `message` field out of a JSON error body
///
/// The services wrap errors as `{"message": "..."}`; anything else is
/// passed through verbatim.
pub(crate) fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// Attach a bearer token to a request when one is configured
pub(crate) fn with_bearer(
    req: reqwest::RequestBuilder,
    token: Option<&str>,
) -> reqwest::RequestBuilder {
    match token {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}
