//! Ticket DTOs for the issue tracker API

use serde::{Deserialize, Serialize};

/// Request to open a defect ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicket {
    /// Project key the ticket is filed under
    pub project: String,
    pub title: String,
    pub body: String,
}

/// Reference to a created ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedTicket {
    /// Tracker-assigned key (e.g., "OPS-1042")
    pub key: String,
}
