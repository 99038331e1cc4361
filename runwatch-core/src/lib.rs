//! Runwatch Core
//!
//! Core types for the runwatch job-run watcher.
//!
//! This crate contains:
//! - Domain types: Core entities (JobRun, RunState, LogEvent)
//! - DTOs: Request/response types for the external service APIs

pub mod domain;
pub mod dto;
