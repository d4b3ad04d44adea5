//! Build-time Configuration
//!
//! Values are baked in via `option_env!` when the wasm bundle is built.

use log::LevelFilter;
use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid API base URL {0:?}: {1}")]
    InvalidApiUrl(String, String),
    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
    #[error("invalid log capacity {0:?}")]
    InvalidLogCapacity(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend; `/foods` is resolved against it
    pub api_base_url: Url,
    pub log_level: LevelFilter,
    /// Records kept by the in-memory logger
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: base_url(DEFAULT_API_URL).expect("default API URL is valid"),
            log_level: DEFAULT_LOG_LEVEL,
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Read `FOOD_API_URL`, `FOOD_LOG_LEVEL` and `FOOD_LOG_CAPACITY` captured at compile time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("FOOD_API_URL"),
            option_env!("FOOD_LOG_LEVEL"),
            option_env!("FOOD_LOG_CAPACITY"),
        )
    }

    pub fn from_values(
        api_url: Option<&str>,
        log_level: Option<&str>,
        log_capacity: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = api_url.map(str::trim).filter(|s| !s.is_empty()) {
            config.api_base_url = base_url(url)?;
        }
        if let Some(level) = log_level.map(str::trim).filter(|s| !s.is_empty()) {
            config.log_level = level
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?;
        }
        if let Some(capacity) = log_capacity.map(str::trim).filter(|s| !s.is_empty()) {
            config.log_capacity = capacity
                .parse::<usize>()
                .ok()
                .filter(|c| *c > 0)
                .ok_or_else(|| ConfigError::InvalidLogCapacity(capacity.to_string()))?;
        }

        Ok(config)
    }
}

/// Parse an absolute http(s) URL and make sure it ends with `/` so that
/// relative joins keep any path prefix.
fn base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidApiUrl(raw.to_string(), reason.to_string());

    let mut url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None, None).unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:3333/");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.log_capacity, rolling_logger::DEFAULT_CAPACITY);
    }

    #[test]
    fn test_overrides() {
        let config =
            AppConfig::from_values(Some("https://api.example.com/v1"), Some("debug"), Some("50"))
                .unwrap();
        assert_eq!(config.api_base_url.as_str(), "https://api.example.com/v1/");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_capacity, 50);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some(""), None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_values(Some("not a url"), None, None),
            Err(ConfigError::InvalidApiUrl(..))
        ));
        assert!(matches!(
            AppConfig::from_values(Some("ftp://host"), None, None),
            Err(ConfigError::InvalidApiUrl(..))
        ));
        assert_eq!(
            AppConfig::from_values(None, Some("loud"), None),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
        assert_eq!(
            AppConfig::from_values(None, None, Some("0")),
            Err(ConfigError::InvalidLogCapacity("0".to_string()))
        );
    }
}
