//! API seams between the watcher and the external services
//!
//! Each trait covers what the watcher needs from one service. The HTTP
//! implementations delegate to the typed clients; tests substitute
//! in-memory fakes.

mod logs;
mod runs;
mod tickets;

pub use logs::{HttpRunLogs, RunLogs};
pub use runs::{HttpRunApi, RunApi};
pub use tickets::{DefectSink, HttpDefectSink};
