//! Statistics entities built from the service's per-link stats.

use chrono::{DateTime, Utc};

/// A single recorded click on a short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickDetail {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
}

/// Aggregated statistics for one short link.
///
/// Only ever constructed from a fully decoded stats response, so every field is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub shortcode: String,
    pub original_url: String,
    pub creation_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub total_clicks: u64,
    pub detailed_clicks: Vec<ClickDetail>,
}

impl StatEntry {
    /// Rebuilds the public short link for display.
    pub fn short_link(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.shortcode)
    }

    pub fn has_clicks(&self) -> bool {
        !self.detailed_clicks.is_empty()
    }
}
