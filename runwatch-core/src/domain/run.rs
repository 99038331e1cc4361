//! Job run domain types

use serde::{Deserialize, Serialize};

/// One execution instance of a submitted batch job
///
/// Identified by job name plus the run id assigned by the job service.
/// Never persisted locally; re-fetched from the service on every poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRun {
    pub job_name: String,
    pub run_id: String,
    pub state: RunState,
    pub started_on: Option<chrono::DateTime<chrono::Utc>>,
    pub completed_on: Option<chrono::DateTime<chrono::Utc>>,
    pub error_message: Option<String>,
}

/// Run lifecycle state as reported by the job service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    Queued,
    Starting,
    Running,
    Succeeded,
    Failed,
    Stopped,
}

impl RunState {
    /// Polling ends once the run reaches one of these states
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Stopped)
    }

    /// Only `Succeeded` counts as a successful outcome
    pub fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Queued => "QUEUED",
            Self::Starting => "STARTING",
            Self::Running => "RUNNING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Stopped => "STOPPED",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(RunState::Succeeded.is_terminal());
        assert!(RunState::Failed.is_terminal());
        assert!(RunState::Stopped.is_terminal());
        assert!(!RunState::Queued.is_terminal());
        assert!(!RunState::Starting.is_terminal());
        assert!(!RunState::Running.is_terminal());
    }

    #[test]
    fn test_only_succeeded_is_success() {
        assert!(RunState::Succeeded.is_success());
        assert!(!RunState::Failed.is_success());
        assert!(!RunState::Stopped.is_success());
        assert!(!RunState::Running.is_success());
    }

    #[test]
    fn test_state_uses_wire_spelling() {
        let json = serde_json::to_string(&RunState::Succeeded).unwrap();
        assert_eq!(json, "\"SUCCEEDED\"");

        let state: RunState = serde_json::from_str("\"STOPPED\"").unwrap();
        assert_eq!(state, RunState::Stopped);

        assert_eq!(RunState::Failed.to_string(), "FAILED");
    }
}
