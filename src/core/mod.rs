// Core module - Report pipeline: fetch, preview, write
pub mod auth;
pub mod fetcher;
pub mod presenter;
pub mod writer;

pub use auth::build_headers;
pub use fetcher::FilesystemFetcher;
pub use presenter::{clamp_view_count, present, RowRenderer, ViewCount};
pub use writer::{write_reports, ReportPaths, WriteOutcome};
