//! Runwatch Watcher
//!
//! The run controller: submits batch job runs to the data platform's job
//! service, polls each run at a fixed interval until it reaches a
//! terminal state, and on any non-success outcome pulls the run's log
//! stream and files a defect ticket carrying the final state and logs.
//!
//! No retries, no backoff, no timeouts: one submission, one watch, one
//! verdict. The only suspension point is the interval tick between polls.

pub mod api;
pub mod config;
pub mod watcher;

pub use config::Config;
pub use watcher::{JobWatcher, RunReport};
