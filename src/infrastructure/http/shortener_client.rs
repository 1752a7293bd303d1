//! `reqwest`-backed client for the shortening service.

use crate::api::dto::{ApiErrorBody, CreateShortUrlRequest, CreateShortUrlResponse, StatsResponse};
use crate::config::Config;
use crate::domain::entities::StatEntry;
use crate::domain::gateway::{CreatedShortUrl, NewShortUrl, ShortenerApi};
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// HTTP/JSON implementation of [`ShortenerApi`].
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpShortenerApi {
    client: Client,
    base_url: Url,
}

impl HttpShortenerApi {
    /// Builds a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if `base_url` cannot serve as a base for request paths
    /// or the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::transport(format!("Invalid service URL '{base_url}': {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::transport(format!(
                "Service URL '{base_url}' cannot be used as a base"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Builds a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::transport("Service URL cannot be used as a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Turns a response into a decoded body or a classified error.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to read response body: {e}")))?;

    if !status.is_success() {
        let detail = ApiErrorBody::parse(&bytes).message();
        debug!(status = status.as_u16(), detail = ?detail, "Service rejected request");
        return Err(ApiError::rejected(status.as_u16(), detail));
    }

    serde_json::from_slice(&bytes).map_err(|e| ApiError::decode(e.to_string()))
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::transport(format!("Request timed out: {err}"))
    } else {
        ApiError::transport(format!("Could not reach service: {err}"))
    }
}

#[async_trait]
impl ShortenerApi for HttpShortenerApi {
    async fn create_short_url(&self, request: NewShortUrl) -> Result<CreatedShortUrl, ApiError> {
        let url = self.endpoint(&["shorturls"])?;
        let body = CreateShortUrlRequest::from(request);

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        decode::<CreateShortUrlResponse>(response)
            .await?
            .into_domain()
    }

    async fn fetch_stats(&self, shortcode: &str) -> Result<StatEntry, ApiError> {
        let url = self.endpoint(&["shorturls", shortcode])?;

        let response = self.client.get(url).send().await.map_err(transport_error)?;

        decode::<StatsResponse>(response).await?.into_domain()
    }
}
