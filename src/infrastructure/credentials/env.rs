use super::{CredentialProvider, Credentials, SecretLookup};
use async_trait::async_trait;
use std::env;

/// Reads credentials from two environment variables
#[derive(Debug, Clone)]
pub struct EnvProvider {
    username_var: String,
    password_var: String,
}

impl EnvProvider {
    pub fn new(username_var: String, password_var: String) -> Self {
        Self { username_var, password_var }
    }
}

#[async_trait]
impl CredentialProvider for EnvProvider {
    async fn lookup(&self, _secret_path: &str) -> SecretLookup {
        let username = match env::var(&self.username_var) {
            Ok(value) => value,
            Err(_) => return SecretLookup::failed(format!("{} is not set", self.username_var)),
        };
        let password = match env::var(&self.password_var) {
            Ok(value) => value,
            Err(_) => return SecretLookup::failed(format!("{} is not set", self.password_var)),
        };
        SecretLookup::Found(Credentials::new(username, password))
    }
}
