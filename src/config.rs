use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const MAX_WINDOW_DAYS: i64 = 3650;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api_endpoint: String,
    pub api_token: String,
    pub csv_dir: PathBuf,
    /// Elections whose range start is older than this many days are not exported.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

fn default_window_days() -> i64 {
    7
}

fn default_request_timeout_seconds() -> u64 {
    30
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    if config.api_endpoint.trim().is_empty() {
        return Err(ConfigError::Missing("api_endpoint"));
    }
    if config.api_token.trim().is_empty() {
        return Err(ConfigError::Missing("api_token"));
    }
    if !(0..=MAX_WINDOW_DAYS).contains(&config.window_days) {
        return Err(ConfigError::OutOfRange {
            key: "window_days",
            value: config.window_days,
            max: MAX_WINDOW_DAYS,
        });
    }
    Ok(config)
}
