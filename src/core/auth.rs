use crate::domain::error::{ReporterError, ReporterResult};
use crate::infrastructure::credentials::{CredentialProvider, SecretLookup};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use tracing::{debug, error};

pub const AUTH_USER_HEADER: &str = "X-Auth-User";
pub const AUTH_KEY_HEADER: &str = "X-Auth-Key";

/// Fetch credentials for `secret_path` and turn them into appliance request headers.
pub async fn build_headers(
    provider: &dyn CredentialProvider,
    secret_path: &str,
) -> ReporterResult<HeaderMap> {
    let credentials = match provider.lookup(secret_path).await {
        SecretLookup::Found(credentials) => credentials,
        SecretLookup::Failed { reason } => {
            error!("Secret lookup for {} failed: {}", secret_path, reason);
            return Err(ReporterError::Credential {
                path: secret_path.to_string(),
                reason,
            });
        }
    };
    debug!("Retrieved credentials for user {}", credentials.username);

    let header_value = |value: &str, field: &str| {
        HeaderValue::from_str(value).map_err(|_| ReporterError::Credential {
            path: secret_path.to_string(),
            reason: format!("{} is not a valid header value", field),
        })
    };

    let mut user = header_value(&credentials.username, "username")?;
    let mut key = header_value(&credentials.password, "password")?;
    user.set_sensitive(true);
    key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static("x-auth-user"), user);
    headers.insert(HeaderName::from_static("x-auth-key"), key);
    Ok(headers)
}
