use crate::cli::args::Args;
use crate::cli::output::select_renderer;
use crate::core::fetcher::FilesystemFetcher;
use crate::core::presenter::{present, RowRenderer};
use crate::core::writer::{write_reports, WriteOutcome};
use crate::domain::config::ReporterConfig;
use crate::domain::error::ReporterResult;
use crate::infrastructure::appliance::ApplianceClient;
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::credentials::{provider_from_config, CredentialProvider};
use crate::infrastructure::logging::init_logging;
use std::future::{self, Future};
use std::io::{self, IsTerminal, Write};
use tracing::{info, warn};

/// What one run reports on
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub storage: String,
    pub filename: String,
    pub view: Option<String>,
}

impl From<&Args> for ReportRequest {
    fn from(args: &Args) -> Self {
        Self {
            storage: args.storage.clone(),
            filename: args.filename.clone(),
            view: args.view.clone(),
        }
    }
}

/// Load configuration, set up logging and run one report
pub async fn execute(args: Args) -> ReporterResult<()> {
    let config_manager = ConfigManager::new();
    let mut config = if let Some(config_path) = &args.config {
        config_manager.load_config_from_path(config_path)?
    } else {
        config_manager.load_config()?
    };

    if !args.quiet {
        if let Err(e) = init_logging(&config.global.log_level, args.verbose) {
            eprintln!("Warning: logging disabled: {}", e);
        }
    }

    if args.verify_tls {
        config.appliance.accept_invalid_certs = false;
    }

    let provider = provider_from_config(&config.credentials)?;
    let renderer = select_renderer(
        config.preview.style,
        &config.preview.column_widths,
        io::stdout().is_terminal(),
    );

    let request = ReportRequest::from(&args);
    let mut out = io::stdout();
    run_report(&request, &config, provider.as_ref(), renderer.as_ref(), &mut out).await?;
    Ok(())
}

/// Fetch, optionally preview, and write the report.
///
/// Fatal errors are returned before anything is written. Preview output
/// goes to `out`; write failures are absorbed into the returned outcome.
pub async fn run_report(
    request: &ReportRequest,
    config: &ReporterConfig,
    provider: &dyn CredentialProvider,
    renderer: &dyn RowRenderer,
    out: &mut dyn Write,
) -> ReporterResult<WriteOutcome> {
    let client = ApplianceClient::new(&config.appliance)?;
    let fetcher = FilesystemFetcher::new(&client, provider, &config.credentials.secret_path);

    println!("Fetching data from {}...", request.storage);
    let rows = fetcher.fetch_filesystems(&request.storage).await?;

    if rows.is_empty() {
        println!("No data retrieved from storage");
    } else {
        println!("Retrieved {} filesystems", rows.len());

        if let Some(view) = &request.view {
            if let Err(e) = present(&rows, view, config.preview.default_count, renderer, out) {
                warn!("Preview output failed: {}", e);
            }
        }
    }

    let outcome = write_reports(&rows, &request.filename);
    info!("Report for {} finished", request.storage);
    Ok(outcome)
}

/// Resolve when `signal` reports an interrupt. If the handler could not be
/// installed this never resolves, so the report runs to completion.
pub async fn wait_for_interrupt<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!("Unable to listen for Ctrl-C: {}", e);
        future::pending::<()>().await;
    }
}
