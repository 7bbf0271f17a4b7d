// src/config.rs
use std::{net::SocketAddr, path::PathBuf, time::Duration};

use thiserror::Error;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_PAGE_TITLE: &str = "Chat AI";
pub const DEFAULT_PAGE_SUBTITLE: &str = "Powered by Google Agent Development Kit";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BACKEND_URL must not be empty")]
    EmptyBackendUrl,

    #[error("BIND_ADDR `{0}` is not a valid socket address")]
    InvalidBindAddr(String),

    #[error("BACKEND_TIMEOUT_SECS `{0}` is not a positive integer")]
    InvalidTimeout(String),
}

/// Header text for the chat page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    pub subtitle: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_string(),
            subtitle: DEFAULT_PAGE_SUBTITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL without a trailing slash.
    pub backend_url: String,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    /// `None` waits on the backend indefinitely.
    pub backend_timeout: Option<Duration>,
    pub page: PageConfig,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let backend_url = backend_url.trim().trim_end_matches('/').to_string();
        if backend_url.is_empty() {
            return Err(ConfigError::EmptyBackendUrl);
        }

        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.clone()))?;

        let backend_timeout = match lookup("BACKEND_TIMEOUT_SECS") {
            Some(raw) if !raw.trim().is_empty() => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            _ => None,
        };

        let defaults = PageConfig::default();
        Ok(Self {
            backend_url,
            bind_addr,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            backend_timeout,
            page: PageConfig {
                title: lookup("PAGE_TITLE").unwrap_or(defaults.title),
                subtitle: lookup("PAGE_SUBTITLE").unwrap_or(defaults.subtitle),
            },
        })
    }
}
