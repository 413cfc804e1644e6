use super::{CredentialProvider, Credentials, SecretLookup};
use crate::domain::config::CredentialsConfig;
use crate::domain::error::{ReporterError, ReporterResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::env;
use tracing::{debug, warn};

/// Vault KV v1 secret read
#[derive(Debug, Clone)]
pub struct VaultProvider {
    http: reqwest::Client,
    addr: Option<String>,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct KvResponse {
    #[serde(default)]
    data: Option<KvData>,
}

#[derive(Debug, Deserialize)]
struct KvData {
    username: Option<String>,
    password: Option<String>,
}

impl VaultProvider {
    pub fn new(addr: Option<String>, token: Option<String>) -> ReporterResult<Self> {
        let http = reqwest::Client::builder().build().map_err(|e| ReporterError::Config {
            message: format!("Failed to build Vault HTTP client: {}", e),
        })?;
        Ok(Self { http, addr, token })
    }

    /// Address from config, then `VAULT_ADDR`. Token from the configured variable.
    pub fn from_config(config: &CredentialsConfig) -> ReporterResult<Self> {
        let addr = config
            .vault_addr
            .clone()
            .or_else(|| env::var("VAULT_ADDR").ok());
        let token = env::var(&config.vault_token_env).ok();
        Self::new(addr, token)
    }

    pub fn secret_url(addr: &str, secret_path: &str) -> String {
        format!(
            "{}/v1/{}",
            addr.trim_end_matches('/'),
            secret_path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl CredentialProvider for VaultProvider {
    async fn lookup(&self, secret_path: &str) -> SecretLookup {
        let Some(addr) = &self.addr else {
            return SecretLookup::failed("Vault address is not configured (set VAULT_ADDR)");
        };
        let Some(token) = &self.token else {
            return SecretLookup::failed("Vault token is not set");
        };

        let url = Self::secret_url(addr, secret_path);
        debug!("Reading secret from {}", url);

        let response = match self.http.get(&url).header("X-Vault-Token", token).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Vault request failed: {}", e);
                return SecretLookup::failed(format!("Vault request failed: {}", e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            return SecretLookup::failed(format!("Vault returned HTTP {}", status.as_u16()));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return SecretLookup::failed(format!("Failed to read Vault response: {}", e)),
        };

        match serde_json::from_str::<KvResponse>(&body) {
            Ok(KvResponse {
                data: Some(KvData {
                    username: Some(username),
                    password: Some(password),
                }),
            }) => SecretLookup::Found(Credentials::new(username, password)),
            Ok(_) => SecretLookup::failed("Secret has no username/password"),
            Err(e) => SecretLookup::failed(format!("Malformed Vault response: {}", e)),
        }
    }
}
