//! Watcher configuration
//!
//! Defines all configurable parameters for the watcher including service
//! endpoints, credentials, the polling interval, and defect routing.

use std::time::Duration;

/// Watcher configuration
///
/// Endpoints and intervals are configurable to allow pointing the same
/// binary at different platform environments (dev vs prod).
#[derive(Debug, Clone)]
pub struct Config {
    /// Job service base URL (e.g., "http://localhost:8080")
    pub job_service_url: String,

    /// Log store base URL
    pub log_store_url: String,

    /// Issue tracker base URL
    pub tracker_url: String,

    /// Bearer token for the job service, when it requires one
    pub job_service_token: Option<String>,

    /// Bearer token for the log store
    pub log_store_token: Option<String>,

    /// Bearer token for the issue tracker
    pub tracker_token: Option<String>,

    /// How often to poll the job service for run state
    pub poll_interval: Duration,

    /// Log group that holds run log streams (stream name = run id)
    pub log_group: String,

    /// Tracker project defect tickets are filed under
    pub tracker_project: String,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(job_service_url: String, log_store_url: String, tracker_url: String) -> Self {
        Self {
            job_service_url,
            log_store_url,
            tracker_url,
            job_service_token: None,
            log_store_token: None,
            tracker_token: None,
            poll_interval: Duration::from_secs(10),
            log_group: "/jobs/runs".to_string(),
            tracker_project: "OPS".to_string(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - RUNWATCH_JOB_SERVICE_URL (required)
    /// - RUNWATCH_LOG_STORE_URL (required)
    /// - RUNWATCH_TRACKER_URL (required)
    /// - RUNWATCH_JOB_SERVICE_TOKEN (optional)
    /// - RUNWATCH_LOG_STORE_TOKEN (optional)
    /// - RUNWATCH_TRACKER_TOKEN (optional)
    /// - RUNWATCH_POLL_INTERVAL (optional, seconds, default: 10)
    /// - RUNWATCH_LOG_GROUP (optional, default: "/jobs/runs")
    /// - RUNWATCH_TRACKER_PROJECT (optional, default: "OPS")
    pub fn from_env() -> anyhow::Result<Self> {
        let job_service_url = std::env::var("RUNWATCH_JOB_SERVICE_URL")
            .map_err(|_| anyhow::anyhow!("RUNWATCH_JOB_SERVICE_URL environment variable not set"))?;

        let log_store_url = std::env::var("RUNWATCH_LOG_STORE_URL")
            .map_err(|_| anyhow::anyhow!("RUNWATCH_LOG_STORE_URL environment variable not set"))?;

        let tracker_url = std::env::var("RUNWATCH_TRACKER_URL")
            .map_err(|_| anyhow::anyhow!("RUNWATCH_TRACKER_URL environment variable not set"))?;

        let poll_interval = std::env::var("RUNWATCH_POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        let mut config = Self::new(job_service_url, log_store_url, tracker_url);
        config.job_service_token = std::env::var("RUNWATCH_JOB_SERVICE_TOKEN").ok();
        config.log_store_token = std::env::var("RUNWATCH_LOG_STORE_TOKEN").ok();
        config.tracker_token = std::env::var("RUNWATCH_TRACKER_TOKEN").ok();
        config.poll_interval = poll_interval;

        if let Ok(group) = std::env::var("RUNWATCH_LOG_GROUP") {
            config.log_group = group;
        }
        if let Ok(project) = std::env::var("RUNWATCH_TRACKER_PROJECT") {
            config.tracker_project = project;
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [
            ("job_service_url", &self.job_service_url),
            ("log_store_url", &self.log_store_url),
            ("tracker_url", &self.tracker_url),
        ] {
            if url.is_empty() {
                anyhow::bail!("{} cannot be empty", name);
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.log_group.is_empty() {
            anyhow::bail!("log_group cannot be empty");
        }

        if self.tracker_project.is_empty() {
            anyhow::bail!("tracker_project cannot be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            "http://localhost:8080".to_string(),
            "http://localhost:8081".to_string(),
            "http://localhost:8082".to_string(),
        )
    }
}
