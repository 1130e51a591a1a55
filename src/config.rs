//! Runtime configuration.
//!
//! [`AppConfig`] has sensible defaults (in-memory catalog, emulator URLs) and builder
//! methods for tests. [`AppConfig::from_env`] overlays `BOOKS_*` environment variables.

use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::auth::static_credentials::{DEFAULT_EMAIL, DEFAULT_PASSWORD};
use crate::model::LoginData;

pub const DEFAULT_BOOKS_URL: &str = "http://10.0.2.2:8080/api/biblioteca/";
pub const DEFAULT_ADMIN_URL: &str = "http://10.0.2.2:8080/api/admin/";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

pub const ENV_SOURCE: &str = "BOOKS_SOURCE";
pub const ENV_BOOKS_URL: &str = "BOOKS_API_URL";
pub const ENV_ADMIN_URL: &str = "BOOKS_ADMIN_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "BOOKS_HTTP_TIMEOUT_SECS";
pub const ENV_MEMORY_LATENCY_MS: &str = "BOOKS_MEMORY_LATENCY_MS";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown book source {0:?}, expected \"memory\" or \"rest\"")]
    InvalidSource(String),

    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} is not a valid URL ({value:?}): {reason}")]
    InvalidUrl {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Where books and logins are served from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookSource {
    /// The seeded in-memory catalog and the fixed credential pair.
    #[default]
    Memory,
    /// The remote REST API.
    Rest,
}

impl FromStr for BookSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(BookSource::Memory),
            "rest" => Ok(BookSource::Rest),
            _ => Err(ConfigError::InvalidSource(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub source: BookSource,
    pub books_url: String,
    pub admin_url: String,
    pub http_timeout: Duration,
    /// Delay before every in-memory list, zero to disable.
    pub memory_latency: Duration,
    pub channel_buffer: usize,
    /// The pair accepted by the in-memory login.
    pub credentials: LoginData,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: BookSource::Memory,
            books_url: DEFAULT_BOOKS_URL.to_string(),
            admin_url: DEFAULT_ADMIN_URL.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            memory_latency: Duration::ZERO,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            credentials: LoginData::new(DEFAULT_EMAIL, DEFAULT_PASSWORD),
        }
    }
}

impl AppConfig {
    pub fn with_source(mut self, source: BookSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_books_url(mut self, url: impl Into<String>) -> Self {
        self.books_url = url.into();
        self
    }

    pub fn with_admin_url(mut self, url: impl Into<String>) -> Self {
        self.admin_url = url.into();
        self
    }

    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn with_memory_latency(mut self, latency: Duration) -> Self {
        self.memory_latency = latency;
        self
    }

    pub fn with_channel_buffer(mut self, buffer: usize) -> Self {
        self.channel_buffer = buffer.max(1);
        self
    }

    pub fn with_credentials(mut self, credentials: LoginData) -> Self {
        self.credentials = credentials;
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each `BOOKS_*` key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(source) = lookup(ENV_SOURCE) {
            config.source = source.parse()?;
        }
        if let Some(url) = lookup(ENV_BOOKS_URL) {
            parse_url(ENV_BOOKS_URL, &url)?;
            config.books_url = url;
        }
        if let Some(url) = lookup(ENV_ADMIN_URL) {
            parse_url(ENV_ADMIN_URL, &url)?;
            config.admin_url = url;
        }
        if let Some(secs) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            config.http_timeout = Duration::from_secs(parse_number(ENV_HTTP_TIMEOUT_SECS, &secs)?);
        }
        if let Some(millis) = lookup(ENV_MEMORY_LATENCY_MS) {
            config.memory_latency =
                Duration::from_millis(parse_number(ENV_MEMORY_LATENCY_MS, &millis)?);
        }
        Ok(config)
    }

    pub fn books_endpoint(&self) -> Result<Url, ConfigError> {
        parse_url(ENV_BOOKS_URL, &self.books_url)
    }

    pub fn admin_endpoint(&self) -> Result<Url, ConfigError> {
        parse_url(ENV_ADMIN_URL, &self.admin_url)
    }
}

fn parse_url(key: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_number(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_SOURCE, "REST"),
            (ENV_BOOKS_URL, "http://localhost:9000/api/biblioteca/"),
            (ENV_HTTP_TIMEOUT_SECS, "3"),
            (ENV_MEMORY_LATENCY_MS, "250"),
        ]))
        .unwrap();

        assert_eq!(config.source, BookSource::Rest);
        assert_eq!(config.books_url, "http://localhost:9000/api/biblioteca/");
        assert_eq!(config.admin_url, DEFAULT_ADMIN_URL);
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.memory_latency, Duration::from_millis(250));
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[(ENV_SOURCE, "sqlite")])),
            Err(ConfigError::InvalidSource("sqlite".into()))
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[(ENV_HTTP_TIMEOUT_SECS, "-1")])),
            Err(ConfigError::InvalidNumber {
                key: ENV_HTTP_TIMEOUT_SECS,
                value: "-1".into()
            })
        );
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(ENV_ADMIN_URL, "not a url")])),
            Err(ConfigError::InvalidUrl { key: ENV_ADMIN_URL, .. })
        ));
    }

    #[test]
    fn test_channel_buffer_never_zero() {
        assert_eq!(AppConfig::default().with_channel_buffer(0).channel_buffer, 1);
    }
}
