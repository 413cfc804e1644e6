use thiserror::Error;

/// Fatal reporter errors. Any of these aborts the run at the CLI boundary.
#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("Failed to retrieve secrets for {path}: {reason}")]
    Credential { path: String, reason: String },

    #[error("HTTP error {status} from {url}: {body}")]
    Http { url: String, status: u16, body: String },

    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response body from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReporterError {
    /// Process exit status for this error kind. 2 is left to clap usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReporterError::Credential { .. } => 3,
            ReporterError::Http { .. } | ReporterError::Transport { .. } => 4,
            ReporterError::Decode { .. } => 5,
            ReporterError::Config { .. } | ReporterError::Io(_) => 1,
        }
    }
}

pub type ReporterResult<T> = Result<T, ReporterError>;

/// Report file errors. Recoverable: the writer logs these and carries on.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write CSV {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to serialize JSON {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a requested preview count was replaced. Recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid number: {raw}. Showing {substitute} rows instead.")]
    NotANumber { raw: String, substitute: usize },

    #[error("Non-positive number: {requested}. Showing {substitute} rows instead.")]
    NonPositive { requested: String, substitute: usize },

    #[error("Requested {requested} rows, but only {available} available. Showing {available} rows instead.")]
    ExceedsAvailable { requested: String, available: usize },
}
