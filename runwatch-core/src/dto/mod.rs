//! DTOs for the external service APIs

pub mod log;
pub mod run;
pub mod ticket;
