// Domain module - Report model, configuration and errors
pub mod config;
pub mod error;
pub mod report;
