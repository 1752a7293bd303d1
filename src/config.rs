//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any request is issued.
//!
//! ```bash
//! export SHORTENER_BASE_URL="http://localhost:5000"
//! export REQUEST_TIMEOUT_SECS="10"
//! ```
//!
//! ## Optional Variables
//!
//! - `SHORTENER_BASE_URL` - Base URL of the shortening service (default: `http://localhost:5000`)
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout in seconds (default: 10, max: 300)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    /// Upper bound for a single request, connect time included.
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `REQUEST_TIMEOUT_SECS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("SHORTENER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS must be a number, got '{raw}'"))?,
            Err(_) => 10,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an absolute `http`/`https` URL
    /// - `request_timeout_secs` is 0 or above 300
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.base_url)
            .with_context(|| format!("SHORTENER_BASE_URL is not a valid URL: '{}'", self.base_url))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!(
                "SHORTENER_BASE_URL must use http or https, got '{}'",
                parsed.scheme()
            );
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            anyhow::bail!(
                "REQUEST_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.request_timeout_secs
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service: {}", self.base_url);
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in the binary).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
