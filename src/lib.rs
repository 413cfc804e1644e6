//! zfs-reporter Library
//!
//! Retrieves filesystem inventory from a ZFS storage appliance's REST API,
//! authenticating with credentials from a secrets store, and writes the
//! result as CSV and JSON reports with an optional console preview.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use domain::error::{InputError, ReporterError, ReporterResult, WriteError};
pub use domain::config::ReporterConfig;
pub use domain::report::{ReportRow, COLUMNS};
pub use crate::core::{FilesystemFetcher, WriteOutcome};
