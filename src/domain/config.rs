use serde::{Deserialize, Serialize};

/// Reporter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Where appliance credentials come from
    #[serde(default)]
    pub credentials: CredentialsConfig,
    /// Appliance endpoint settings
    #[serde(default)]
    pub appliance: ApplianceConfig,
    /// Console preview settings
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Credential source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Credential provider
    #[serde(default)]
    pub source: CredentialSource,
    /// Secret path holding `username` and `password`
    #[serde(default = "default_secret_path")]
    pub secret_path: String,
    /// Vault address; falls back to `VAULT_ADDR`
    #[serde(default)]
    pub vault_addr: Option<String>,
    /// Environment variable holding the Vault token
    #[serde(default = "default_vault_token_env")]
    pub vault_token_env: String,
    /// Environment variable holding the username (env source)
    #[serde(default = "default_username_env")]
    pub username_env: String,
    /// Environment variable holding the password (env source)
    #[serde(default = "default_password_env")]
    pub password_env: String,
}

/// Credential provider selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialSource {
    #[default]
    Vault,
    Env,
}

/// Appliance endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplianceConfig {
    /// URL scheme
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Management API port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Skip certificate validation. Appliances ship self-signed certificates.
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,
    /// Request timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Console preview configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Renderer selection
    #[serde(default)]
    pub style: PreviewStyle,
    /// Rows shown when the requested count is unusable
    #[serde(default = "default_view_count")]
    pub default_count: usize,
    /// Wrap width per column, in output column order
    #[serde(default = "default_column_widths")]
    pub column_widths: Vec<usize>,
}

/// Preview renderer selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewStyle {
    /// Table on a terminal, plain text otherwise
    #[default]
    Auto,
    Table,
    Plain,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

pub const DEFAULT_SECRET_PATH: &str = "it-storage/KVv1/oracle/ZFS/zapi_ro_user";

fn default_secret_path() -> String {
    DEFAULT_SECRET_PATH.to_string()
}

fn default_vault_token_env() -> String {
    "VAULT_TOKEN".to_string()
}

fn default_username_env() -> String {
    "ZFS_REPORTER_USERNAME".to_string()
}

fn default_password_env() -> String {
    "ZFS_REPORTER_PASSWORD".to_string()
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_port() -> u16 {
    215
}

fn default_accept_invalid_certs() -> bool {
    true
}

pub const DEFAULT_VIEW_COUNT: usize = 3;

fn default_view_count() -> usize {
    DEFAULT_VIEW_COUNT
}

pub const DEFAULT_COLUMN_WIDTHS: [usize; 8] = [20, 15, 22, 22, 22, 15, 14, 14];

fn default_column_widths() -> Vec<usize> {
    DEFAULT_COLUMN_WIDTHS.to_vec()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            source: CredentialSource::default(),
            secret_path: default_secret_path(),
            vault_addr: None,
            vault_token_env: default_vault_token_env(),
            username_env: default_username_env(),
            password_env: default_password_env(),
        }
    }
}

impl Default for ApplianceConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            port: default_port(),
            accept_invalid_certs: default_accept_invalid_certs(),
            timeout_secs: None,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            style: PreviewStyle::default(),
            default_count: default_view_count(),
            column_widths: default_column_widths(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = ReporterConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: ReporterConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.appliance.port, 215);
        assert_eq!(deserialized.credentials.secret_path, DEFAULT_SECRET_PATH);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: ReporterConfig = toml::from_str("").unwrap();
        assert_eq!(config.appliance.scheme, "https");
        assert!(config.appliance.accept_invalid_certs);
        assert!(config.appliance.timeout_secs.is_none());
        assert_eq!(config.preview.default_count, 3);
        assert_eq!(config.preview.column_widths, DEFAULT_COLUMN_WIDTHS.to_vec());
        assert_eq!(config.credentials.source, CredentialSource::Vault);
    }

    #[test]
    fn test_partial_sections() {
        let config: ReporterConfig = toml::from_str(
            r#"
            [credentials]
            source = "env"

            [appliance]
            accept_invalid_certs = false
            timeout_secs = 30

            [preview]
            style = "plain"
            "#,
        )
        .unwrap();

        assert_eq!(config.credentials.source, CredentialSource::Env);
        assert_eq!(config.credentials.username_env, "ZFS_REPORTER_USERNAME");
        assert!(!config.appliance.accept_invalid_certs);
        assert_eq!(config.appliance.timeout_secs, Some(30));
        assert_eq!(config.appliance.port, 215);
        assert_eq!(config.preview.style, PreviewStyle::Plain);
    }
}
