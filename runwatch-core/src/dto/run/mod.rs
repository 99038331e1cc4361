//! Run DTOs for the job service API

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request to start a new job run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRun {
    /// Arguments handed to the job, key/value
    pub arguments: HashMap<String, String>,
    /// Client-generated token the service uses to deduplicate submissions
    pub request_token: String,
}

/// Response to an accepted submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartedRun {
    pub run_id: String,
}
