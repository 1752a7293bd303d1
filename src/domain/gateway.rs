//! Trait for the remote shortening/statistics service.

use crate::domain::entities::StatEntry;
use crate::error::ApiError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Input for creating a short link.
///
/// `validity_minutes` and `shortcode` are omitted from the request when `None`; the service
/// then applies its own defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub url: String,
    pub validity_minutes: Option<u32>,
    pub shortcode: Option<String>,
}

/// The service's answer to a successful create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedShortUrl {
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}

/// Interface of the remote URL shortening service.
///
/// Each method issues exactly one request and never retries.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShortenerApi`] - HTTP/JSON implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// Creates a short link (`POST /shorturls`).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Rejected`] on a non-2xx status
    /// - [`ApiError::Transport`] if the service is unreachable or times out
    /// - [`ApiError::Decode`] if a 2xx body does not match the expected shape
    async fn create_short_url(&self, request: NewShortUrl) -> Result<CreatedShortUrl, ApiError>;

    /// Fetches statistics for one shortcode (`GET /shorturls/{shortcode}`).
    ///
    /// # Errors
    ///
    /// Same classification as [`ShortenerApi::create_short_url`].
    async fn fetch_stats(&self, shortcode: &str) -> Result<StatEntry, ApiError>;
}
