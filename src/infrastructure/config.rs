use crate::domain::{config::ReporterConfig, error::{ReporterError, ReporterResult}};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration manager
pub struct ConfigManager {
    global_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> Self {
        Self {
            global_config_path: Self::get_global_config_path(),
        }
    }

    /// Load the global configuration file if it exists, defaults otherwise
    pub fn load_config(&self) -> ReporterResult<ReporterConfig> {
        match &self.global_config_path {
            Some(path) if path.exists() => self.load_config_from_path(path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(ReporterConfig::default())
            }
        }
    }

    /// Get global configuration path
    fn get_global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zfs-reporter").join("config.toml"))
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> ReporterResult<ReporterConfig> {
        let content = fs::read_to_string(path).map_err(|e| ReporterError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        debug!("Loaded configuration from {}", path.display());

        toml::from_str(&content).map_err(|e| ReporterError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
