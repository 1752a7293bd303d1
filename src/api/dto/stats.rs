//! DTOs for the per-link statistics endpoint.

use crate::domain::entities::{ClickDetail, StatEntry};
use crate::error::ApiError;
use crate::utils::timestamp;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Successful response of `GET /shorturls/{shortcode}`.
#[derive(Debug, Deserialize, Validate)]
pub struct StatsResponse {
    #[validate(length(min = 1, message = "shortcode must not be empty"))]
    pub shortcode: String,
    pub original_url: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub creation_date: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub expiry_date: DateTime<Utc>,
    pub total_clicks: u64,

    /// Absent when the link has never been clicked.
    #[serde(default)]
    pub detailed_clicks: Vec<ClickRecord>,
}

/// One click as reported by the service.
#[derive(Debug, Deserialize)]
pub struct ClickRecord {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
}

impl From<ClickRecord> for ClickDetail {
    fn from(record: ClickRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            source: record.source,
            location: record.location,
        }
    }
}

impl StatsResponse {
    /// Validates the decoded body and converts it into a [`StatEntry`].
    pub fn into_domain(self) -> Result<StatEntry, ApiError> {
        self.validate()
            .map_err(|e| ApiError::decode(format!("invalid stats response: {e}")))?;

        Ok(StatEntry {
            shortcode: self.shortcode,
            original_url: self.original_url,
            creation_date: self.creation_date,
            expiry_date: self.expiry_date,
            total_clicks: self.total_clicks,
            detailed_clicks: self.detailed_clicks.into_iter().map(Into::into).collect(),
        })
    }
}
