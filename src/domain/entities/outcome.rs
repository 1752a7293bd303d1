//! Outcome entity: the immutable record of one successful shortening.

use chrono::{DateTime, Utc};

/// A successfully shortened URL.
///
/// `source_id` refers back to the draft that produced it; the draft is not owned and may
/// have been edited since.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub original_url: String,
    pub short_link: String,
    pub expiry: DateTime<Utc>,
    pub source_id: u32,
}

impl ShortenOutcome {
    pub fn new(
        original_url: String,
        short_link: String,
        expiry: DateTime<Utc>,
        source_id: u32,
    ) -> Self {
        Self {
            original_url,
            short_link,
            expiry,
            source_id,
        }
    }

    /// The final path segment of the short link.
    pub fn shortcode(&self) -> &str {
        shortcode_of(&self.short_link)
    }
}

/// Extracts the shortcode (last `/`-separated segment) from a short link.
///
/// A trailing slash yields an empty shortcode, matching a plain split on `/`.
pub fn shortcode_of(short_link: &str) -> &str {
    short_link.rsplit('/').next().unwrap_or(short_link)
}
