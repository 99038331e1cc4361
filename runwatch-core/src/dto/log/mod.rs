//! Log DTOs for the log store API

use serde::{Deserialize, Serialize};

use crate::domain::log::LogEvent;

/// One page of events from a log stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEventsPage {
    pub events: Vec<LogEvent>,
    /// Cursor for the next page; `None` once the stream is exhausted
    pub next_token: Option<String>,
}
