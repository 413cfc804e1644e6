// Logging module - Logging infrastructure
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use std::io;

/// Build the filter directive for a configured level. `RUST_LOG` wins when set.
pub fn filter_directive(log_level: &str, verbose: bool) -> String {
    let level = if verbose { "debug" } else { log_level };
    format!("zfs_reporter={},warn", level)
}

/// Initialize logging system
pub fn init_logging(log_level: &str, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(log_level, verbose)))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true)
        )
        .try_init()?;

    tracing::debug!("zfs-reporter logging initialized");
    Ok(())
}
