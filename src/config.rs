//! Configuration management for the Laritmo client
//!
//! Loads `config.toml` (optional) with `LARITMO__<SECTION>__<KEY>` environment
//! overrides, falling back to built-in defaults for anything left unset.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_CONFIG_PATH: &str = "config";
const ENV_PREFIX: &str = "LARITMO";

/// Complete client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub appearance: AppearanceConfig,
}

/// Remote API settings
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix, e.g. `http://localhost:8080/api`
    pub base_url: String,

    /// Per-request timeout applied by the HTTP transport
    pub timeout_secs: u64,

    pub user_agent: String,
}

/// Durable state and download locations
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// JSON file backing the session/preference key-value store
    pub state_file: String,

    /// Directory generated ticket documents are saved into
    pub downloads_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppearanceConfig {
    /// Stands in for the desktop "prefers dark" signal when the theme is `system`
    pub prefer_dark: bool,
}

impl ClientConfig {
    /// Load configuration from `./config.toml` with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from the given file stem (extension optional)
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("api.base_url", "http://localhost:8080/api")?
            .set_default("api.timeout_secs", 30_i64)?
            .set_default("api.user_agent", "laritmo-client/0.1")?
            .set_default("storage.state_file", "./laritmo-state.json")?
            .set_default("storage.downloads_dir", "./downloads")?
            .set_default("appearance.prefer_dark", false)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(config::ConfigError::Message(
                "api.base_url cannot be empty".into(),
            ));
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(config::ConfigError::Message(format!(
                "api.base_url must be an http(s) URL, got `{base_url}`"
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "api.timeout_secs must be greater than 0".into(),
            ));
        }

        if self.storage.state_file.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "storage.state_file cannot be empty".into(),
            ));
        }

        if self.storage.downloads_dir.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "storage.downloads_dir cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

impl ApiConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl StorageConfig {
    pub fn state_file_path(&self) -> PathBuf {
        PathBuf::from(&self.state_file)
    }

    pub fn downloads_path(&self) -> PathBuf {
        PathBuf::from(&self.downloads_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClientConfig {
        ClientConfig {
            api: ApiConfig {
                base_url: "http://localhost:8080/api".into(),
                timeout_secs: 30,
                user_agent: "test".into(),
            },
            storage: StorageConfig {
                state_file: "state.json".into(),
                downloads_dir: "downloads".into(),
            },
            appearance: AppearanceConfig { prefer_dark: false },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_base_url() {
        let mut config = sample();
        config.api.base_url = "   ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = sample();
        config.api.base_url = "ftp://localhost/api".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = sample();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ClientConfig::load_from("definitely-missing-laritmo-config").unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.request_timeout(), Duration::from_secs(30));
        assert!(!config.appearance.prefer_dark);
    }
}
