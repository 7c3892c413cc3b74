//! CLI library components for the RIPS validator.

pub mod batch;
pub mod config;
pub mod logging;
