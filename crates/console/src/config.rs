//! Console configuration (environment with defaults).

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use backoffice_auth::{FORBIDDEN_ROUTE, LOGIN_ROUTE};
use backoffice_client::DEFAULT_TIMEOUT;
use backoffice_observability::LogFormat;

pub const ENV_API_URL: &str = "BACKOFFICE_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "BACKOFFICE_TIMEOUT_SECS";
pub const ENV_DATA_DIR: &str = "BACKOFFICE_DATA_DIR";
pub const ENV_LOG_FORMAT: &str = "BACKOFFICE_LOG_FORMAT";

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const HOME_ROUTE: &str = "/dashboard";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var}: {message}")]
    InvalidLogFormat { var: &'static str, message: String },

    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidApiUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    /// Where persisted state lives; `None` means the OS data directory.
    pub data_dir: Option<PathBuf>,
    pub log_format: LogFormat,
    pub login_route: String,
    pub forbidden_route: String,
    pub home_route: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            data_dir: None,
            log_format: LogFormat::default(),
            login_route: LOGIN_ROUTE.to_string(),
            forbidden_route: FORBIDDEN_ROUTE.to_string(),
            home_route: HOME_ROUTE.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Read `BACKOFFICE_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            cfg.api_url = validate_api_url(ENV_API_URL, url)?;
        } else {
            tracing::debug!(default = DEFAULT_API_URL, "{ENV_API_URL} not set");
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    var: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                })?;
            cfg.request_timeout = Duration::from_secs(secs);
        }

        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            cfg.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            cfg.log_format = raw
                .parse()
                .map_err(|message| ConfigError::InvalidLogFormat {
                    var: ENV_LOG_FORMAT,
                    message,
                })?;
        }

        Ok(cfg)
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        self.api_url = validate_api_url("--api-url", url.into())?;
        Ok(self)
    }
}

fn validate_api_url(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.trim_end_matches('/').to_string())
    } else {
        Err(ConfigError::InvalidApiUrl { var, value })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = ConsoleConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, ConsoleConfig::default());
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
        assert_eq!(cfg.login_route, "/login");
        assert_eq!(cfg.forbidden_route, "/forbidden");
    }

    #[test]
    fn reads_overrides() {
        let cfg = ConsoleConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://api.example.com/"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_DATA_DIR, "/tmp/bo"),
            (ENV_LOG_FORMAT, "pretty"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_url, "https://api.example.com");
        assert_eq!(cfg.request_timeout, Duration::from_secs(5));
        assert_eq!(cfg.data_dir, Some(PathBuf::from("/tmp/bo")));
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            ConsoleConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            ConsoleConfig::from_lookup(lookup(&[(ENV_API_URL, "ftp://x")])),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
        assert!(ConsoleConfig::default().with_api_url("localhost").is_err());
    }
}
