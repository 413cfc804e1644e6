//! HTTP transport to the storage appliance's REST API.

use crate::domain::config::ApplianceConfig;
use crate::domain::error::{ReporterError, ReporterResult};
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const FILESYSTEMS_PATH: &str = "/api/storage/v1/filesystems";

/// Appliance API client
#[derive(Debug, Clone)]
pub struct ApplianceClient {
    http: reqwest::Client,
    scheme: String,
    port: u16,
}

impl ApplianceClient {
    pub fn new(config: &ApplianceConfig) -> ReporterResult<Self> {
        let mut builder = reqwest::Client::builder();

        // Appliances present self-signed certificates; trust is a deployment decision.
        if config.accept_invalid_certs {
            warn!("TLS certificate validation is disabled for appliance requests");
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder.build().map_err(|e| ReporterError::Config {
            message: format!("Failed to build appliance HTTP client: {}", e),
        })?;

        Ok(Self {
            http,
            scheme: config.scheme.clone(),
            port: config.port,
        })
    }

    pub fn filesystems_url(&self, storage: &str) -> String {
        format!("{}://{}:{}{}", self.scheme, storage, self.port, FILESYSTEMS_PATH)
    }

    /// One GET, returning the decoded JSON body of a successful response
    pub async fn get_json(&self, url: &str, headers: HeaderMap) -> ReporterResult<Value> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|source| ReporterError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ReporterError::Transport {
            url: url.to_string(),
            source,
        })?;
        debug!("{} answered {} ({} bytes)", url, status, body.len());

        if !status.is_success() {
            return Err(ReporterError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ReporterError::Decode {
            url: url.to_string(),
            message: format!("invalid JSON: {}", e),
        })
    }
}
