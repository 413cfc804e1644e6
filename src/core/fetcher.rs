//! Filesystem inventory retrieval.
//!
//! Credentials are resolved before any appliance request is made. The
//! response body is projected record by record; a malformed record only
//! degrades its own fields.

use crate::core::auth::build_headers;
use crate::domain::error::{ReporterError, ReporterResult};
use crate::domain::report::{FilesystemRecord, ReportRow};
use crate::infrastructure::appliance::ApplianceClient;
use crate::infrastructure::credentials::CredentialProvider;
use serde_json::Value;
use tracing::{debug, info};

pub struct FilesystemFetcher<'a> {
    client: &'a ApplianceClient,
    provider: &'a dyn CredentialProvider,
    secret_path: &'a str,
}

impl<'a> FilesystemFetcher<'a> {
    pub fn new(
        client: &'a ApplianceClient,
        provider: &'a dyn CredentialProvider,
        secret_path: &'a str,
    ) -> Self {
        Self { client, provider, secret_path }
    }

    /// Fetch every filesystem on `storage`, in appliance order.
    pub async fn fetch_filesystems(&self, storage: &str) -> ReporterResult<Vec<ReportRow>> {
        let headers = build_headers(self.provider, self.secret_path).await?;
        let url = self.client.filesystems_url(storage);

        let body = self.client.get_json(&url, headers).await?;
        let rows = project_filesystems(&url, body)?;
        info!("{} returned {} filesystems", storage, rows.len());
        Ok(rows)
    }
}

/// Project a `{"filesystems": [...]}` body into report rows.
pub fn project_filesystems(url: &str, body: Value) -> ReporterResult<Vec<ReportRow>> {
    let Value::Object(mut object) = body else {
        return Err(ReporterError::Decode {
            url: url.to_string(),
            message: "expected a JSON object".to_string(),
        });
    };

    let records = match object.remove("filesystems") {
        None => {
            debug!("Response has no filesystems key");
            Vec::new()
        }
        Some(Value::Array(records)) => records,
        Some(other) => {
            return Err(ReporterError::Decode {
                url: url.to_string(),
                message: format!("filesystems is not an array: {}", other),
            })
        }
    };

    Ok(records
        .into_iter()
        .map(|record| ReportRow::from(FilesystemRecord::from_value(record)))
        .collect())
}
