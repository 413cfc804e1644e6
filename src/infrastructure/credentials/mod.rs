//! Credential providers.
//!
//! A provider answers one question: what are the appliance credentials
//! stored under a secret path. Failure is reported as a value, not an error,
//! so the header builder decides how fatal it is.

pub mod env;
pub mod vault;

pub use env::EnvProvider;
pub use vault::VaultProvider;

use crate::domain::config::{CredentialSource, CredentialsConfig};
use crate::domain::error::ReporterResult;
use async_trait::async_trait;
use std::fmt;

/// Appliance login
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of a secret lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretLookup {
    Found(Credentials),
    Failed { reason: String },
}

impl SecretLookup {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed { reason: reason.into() }
    }
}

/// Source of appliance credentials
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn lookup(&self, secret_path: &str) -> SecretLookup;
}

/// Fixed answer, independent of the path
#[derive(Debug, Clone)]
pub struct StaticProvider {
    lookup: SecretLookup,
}

impl StaticProvider {
    pub fn new(lookup: SecretLookup) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl CredentialProvider for StaticProvider {
    async fn lookup(&self, _secret_path: &str) -> SecretLookup {
        self.lookup.clone()
    }
}

/// Build the configured provider
pub fn provider_from_config(config: &CredentialsConfig) -> ReporterResult<Box<dyn CredentialProvider>> {
    match config.source {
        CredentialSource::Vault => Ok(Box::new(VaultProvider::from_config(config)?)),
        CredentialSource::Env => Ok(Box::new(EnvProvider::new(
            config.username_env.clone(),
            config.password_env.clone(),
        ))),
    }
}
