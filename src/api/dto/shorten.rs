//! DTOs for the create-short-link endpoint.

use crate::domain::gateway::{CreatedShortUrl, NewShortUrl};
use crate::error::ApiError;
use crate::utils::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /shorturls`.
///
/// Optional fields are omitted entirely rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateShortUrlRequest {
    pub url: String,

    /// Lifetime of the link in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcode: Option<String>,
}

impl From<NewShortUrl> for CreateShortUrlRequest {
    fn from(new: NewShortUrl) -> Self {
        Self {
            url: new.url,
            validity: new.validity_minutes,
            shortcode: new.shortcode,
        }
    }
}

/// Successful response of `POST /shorturls`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    /// Absolute URL of the new short link.
    #[validate(url(message = "shortLink is not an absolute URL"))]
    pub short_link: String,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub expiry: DateTime<Utc>,
}

impl CreateShortUrlResponse {
    /// Validates the decoded body and converts it into the domain value.
    pub fn into_domain(self) -> Result<CreatedShortUrl, ApiError> {
        self.validate()
            .map_err(|e| ApiError::decode(format!("invalid create response: {e}")))?;

        Ok(CreatedShortUrl {
            short_link: self.short_link,
            expiry: self.expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_absent_fields() {
        let request = CreateShortUrlRequest::from(NewShortUrl {
            url: "https://example.com".to_string(),
            validity_minutes: None,
            shortcode: None,
        });

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "url": "https://example.com" }));
    }

    #[test]
    fn test_request_includes_present_fields() {
        let request = CreateShortUrlRequest::from(NewShortUrl {
            url: "https://example.com".to_string(),
            validity_minutes: Some(30),
            shortcode: Some("promo".to_string()),
        });

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({ "url": "https://example.com", "validity": 30, "shortcode": "promo" })
        );
    }

    #[test]
    fn test_response_decodes() {
        let response: CreateShortUrlResponse = serde_json::from_value(json!({
            "shortLink": "http://localhost:5000/abc123",
            "expiry": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        let created = response.into_domain().unwrap();
        assert_eq!(created.short_link, "http://localhost:5000/abc123");
        assert_eq!(created.expiry.to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_response_rejects_relative_short_link() {
        let response: CreateShortUrlResponse = serde_json::from_value(json!({
            "shortLink": "abc123",
            "expiry": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        assert!(matches!(response.into_domain(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_response_requires_expiry() {
        let result = serde_json::from_value::<CreateShortUrlResponse>(json!({
            "shortLink": "http://localhost:5000/abc123"
        }));
        assert!(result.is_err());
    }
}
