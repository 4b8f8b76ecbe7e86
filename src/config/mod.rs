use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the gateway.
/// Handles loading, saving, and managing server settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Base URL of the tabular stats provider, without trailing slash.
    #[serde(default = "default_stats_api_base")]
    pub stats_api_base: String,
    /// Base URL of the live data CDN, without trailing slash.
    #[serde(default = "default_live_api_base")]
    pub live_api_base: String,
    /// Upstream HTTP timeout in seconds. Defaults to 10 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_bind_address() -> String {
    constants::DEFAULT_BIND_ADDRESS.to_string()
}

fn default_stats_api_base() -> String {
    constants::DEFAULT_STATS_API_BASE.to_string()
}

fn default_live_api_base() -> String {
    constants::DEFAULT_LIVE_API_BASE.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: default_bind_address(),
            stats_api_base: default_stats_api_base(),
            live_api_base: default_live_api_base(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists; the server never
    /// prompts since it usually runs unattended.
    ///
    /// # Environment Variables
    /// - `NBA_GATEWAY_BIND` - Override listen address
    /// - `NBA_STATS_API_BASE` - Override stats API base URL
    /// - `NBA_LIVE_API_BASE` - Override live data base URL
    /// - `NBA_GATEWAY_HTTP_TIMEOUT` - Override upstream timeout in seconds
    /// - `NBA_GATEWAY_LOG_FILE` - Override log file path
    ///
    /// The result is not validated: command-line flags may still replace
    /// values, so callers validate once everything has been applied.
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable or malformed
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_env(&get_config_path(), |name| std::env::var(name).ok()).await
    }

    /// Reads `path` when it exists (defaults otherwise), then applies the
    /// environment overrides from `lookup` and normalizes the base URLs.
    pub async fn load_with_env<F>(path: &str, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides(lookup);
        config.normalize();
        Ok(config)
    }

    /// Applies environment overrides using the given variable lookup.
    /// Unparsable timeout values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(env_vars::BIND) {
            self.bind_address = bind;
        }
        if let Some(base) = lookup(env_vars::STATS_API_BASE) {
            self.stats_api_base = base;
        }
        if let Some(base) = lookup(env_vars::LIVE_API_BASE) {
            self.live_api_base = base;
        }
        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok()) {
            self.http_timeout_seconds = timeout;
        }
        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Strips trailing slashes so URL builders can always join with `/`.
    pub fn normalize(&mut self) {
        self.stats_api_base = self.stats_api_base.trim_end_matches('/').to_string();
        self.live_api_base = self.live_api_base.trim_end_matches('/').to_string();
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and the effective settings
    /// - Effective settings include defaults and environment overrides
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not found, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Bind Address:");
        println!("{}", config.bind_address);
        println!("────────────────────────────────────");
        println!("Stats API:");
        println!("{}", config.stats_api_base);
        println!("────────────────────────────────────");
        println!("Live API:");
        println!("{}", config.live_api_base);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/nba_gateway.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory when needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
bind_address = "0.0.0.0:9000"
stats_api_base = "https://stats.example.com/stats"
live_api_base = "https://cdn.example.com/live"
http_timeout_seconds = 5
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert_eq!(config.stats_api_base, "https://stats.example.com/stats");
        assert_eq!(config.live_api_base, "https://cdn.example.com/live");
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
    }

    #[tokio::test]
    async fn test_config_missing_fields_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(&config_path, "http_timeout_seconds = 3\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(config.http_timeout_seconds, 3);
        assert_eq!(config.bind_address, constants::DEFAULT_BIND_ADDRESS);
        assert_eq!(config.stats_api_base, constants::DEFAULT_STATS_API_BASE);
        assert_eq!(config.live_api_base, constants::DEFAULT_LIVE_API_BASE);
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            log_file_path: Some("/custom/log/path".to_string()),
            ..Config::default()
        };

        original_config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed_config.toml");
        let config_path_str = config_path.to_string_lossy();

        let malformed_content = r#"
bind_address = "127.0.0.1:8000"
[invalid_section
malformed = "data
"#;
        tokio::fs::write(&config_path, malformed_content).await.unwrap();

        let result = Config::load_from_path(&config_path_str).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_env_overrides_take_precedence() {
        let vars: HashMap<&str, &str> = [
            (env_vars::BIND, "0.0.0.0:8080"),
            (env_vars::STATS_API_BASE, "http://localhost:9001/stats"),
            (env_vars::LIVE_API_BASE, "http://localhost:9002/live"),
            (env_vars::HTTP_TIMEOUT, "4"),
            (env_vars::LOG_FILE, "/tmp/gateway.log"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.stats_api_base, "http://localhost:9001/stats");
        assert_eq!(config.live_api_base, "http://localhost:9002/live");
        assert_eq!(config.http_timeout_seconds, 4);
        assert_eq!(config.log_file_path, Some("/tmp/gateway.log".to_string()));
    }

    #[tokio::test]
    async fn test_load_with_env_leaves_validation_to_caller() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "stats_api_base = \"https://stats.example.com/stats/\"\n")
            .await
            .unwrap();

        let config = Config::load_with_env(&config_path.to_string_lossy(), |name| {
            (name == env_vars::BIND).then(|| "not-an-address".to_string())
        })
        .await
        .unwrap();

        assert_eq!(config.bind_address, "not-an-address");
        assert_eq!(config.stats_api_base, "https://stats.example.com/stats");
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_load_with_env_without_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("absent.toml");
        let config = Config::load_with_env(&missing.to_string_lossy(), |_| None)
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unparsable_timeout_override_is_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(|name| {
            (name == env_vars::HTTP_TIMEOUT).then(|| "soon".to_string())
        });
        assert_eq!(config.http_timeout_seconds, default_http_timeout());
    }

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        let mut config = Config {
            stats_api_base: "https://stats.example.com/stats/".to_string(),
            live_api_base: "https://cdn.example.com/live//".to_string(),
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.stats_api_base, "https://stats.example.com/stats");
        assert_eq!(config.live_api_base, "https://cdn.example.com/live");
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(toml_string.contains("bind_address = \"127.0.0.1:8000\""));
        assert!(!toml_string.contains("log_file_path"));
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("nba_gateway"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("nba_gateway"));
        assert!(log_dir_path.ends_with("logs"));
    }
}
