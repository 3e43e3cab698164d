//! Centralized configuration management for bookdesk

use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Result, Context};

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the book catalog backend
    pub api_url: String,
    /// Directory the log file is written to
    pub log_dir: PathBuf,
    /// List screen configuration
    pub list: ListConfig,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// Paging and search behaviour of the book list
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Records requested per page
    pub page_size: u32,
    /// Quiet period after the last keystroke before a search is committed (milliseconds)
    pub search_debounce_ms: u64,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            search_debounce_ms: 2000,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_dir: PathBuf::from("."),
            list: ListConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

fn default_user_agent() -> String {
    format!("bookdesk/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var("BOOKDESK_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let log_dir = std::env::var("BOOKDESK_LOG_DIR")
            .unwrap_or_else(|_| ".".to_string())
            .into();

        let list = ListConfig {
            page_size: parse_env_var("BOOKDESK_PAGE_SIZE")?.unwrap_or(10),
            search_debounce_ms: parse_env_var("BOOKDESK_SEARCH_DEBOUNCE_MS")?.unwrap_or(2000),
        };

        let http = HttpConfig {
            timeout_seconds: parse_env_var("BOOKDESK_HTTP_TIMEOUT_SECONDS")?.unwrap_or(30),
            user_agent: std::env::var("BOOKDESK_USER_AGENT")
                .unwrap_or_else(|_| default_user_agent()),
        };

        Ok(Config {
            api_url,
            log_dir,
            list,
            http,
        })
    }

    /// Replace the backend base URL (command line override)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Base URL without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// Get search debounce quiet period as Duration
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.list.search_debounce_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "BOOKDESK_API_URL must start with http:// or https://, got '{}'",
                self.api_url
            ));
        }

        if self.list.page_size == 0 {
            return Err(anyhow::anyhow!("BOOKDESK_PAGE_SIZE must be greater than zero"));
        }

        std::fs::create_dir_all(&self.log_dir)
            .with_context(|| format!("Cannot create log directory: {}", self.log_dir.display()))?;

        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}
