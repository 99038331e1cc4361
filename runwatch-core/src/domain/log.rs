//! Log domain types

use serde::{Deserialize, Serialize};

/// A single line from a run's log stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub message: String,
}
