//! Executes one shortening request and normalizes its result.

use std::sync::Arc;

use crate::domain::entities::{ShortenOutcome, SubmissionDraft};
use crate::domain::gateway::{NewShortUrl, ShortenerApi};
use crate::error::ShortenError;
use crate::utils::input_validator::parse_validity;
use tracing::{info, warn};

/// Issues a single create request per call and classifies the result.
///
/// Never retries; a failed draft can simply be submitted again.
pub struct ShortenRequestExecutor<A: ShortenerApi> {
    api: Arc<A>,
}

impl<A: ShortenerApi> ShortenRequestExecutor<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Builds the request payload for a draft.
    ///
    /// `url` is always sent. `validity` is only included when it parses as a positive integer
    /// and `shortcode` only when it is non-blank.
    pub fn payload(draft: &SubmissionDraft) -> NewShortUrl {
        NewShortUrl {
            url: draft.url.clone(),
            validity_minutes: parse_validity(&draft.validity).ok().flatten(),
            shortcode: draft.custom_shortcode().map(str::to_string),
        }
    }

    /// Shortens the draft's URL.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::RemoteRejected`] when the service answers with a non-success status
    /// - [`ShortenError::NetworkFailure`] on transport or decode failures
    pub async fn execute(&self, draft: &SubmissionDraft) -> Result<ShortenOutcome, ShortenError> {
        let payload = Self::payload(draft);

        info!(
            draft_id = draft.id,
            url = %payload.url,
            validity = ?payload.validity_minutes,
            shortcode = ?payload.shortcode,
            "Attempting to shorten URL"
        );

        match self.api.create_short_url(payload).await {
            Ok(created) => {
                info!(
                    draft_id = draft.id,
                    short_link = %created.short_link,
                    expiry = %created.expiry,
                    "URL shortened successfully"
                );
                Ok(ShortenOutcome::new(
                    draft.url.clone(),
                    created.short_link,
                    created.expiry,
                    draft.id,
                ))
            }
            Err(err) => {
                let err = ShortenError::from(err);
                match &err {
                    ShortenError::RemoteRejected(detail) => {
                        warn!(draft_id = draft.id, detail = %detail, "Error shortening URL")
                    }
                    ShortenError::NetworkFailure(detail) => warn!(
                        draft_id = draft.id,
                        error = %detail,
                        "Network error during URL shortening"
                    ),
                }
                Err(err)
            }
        }
    }
}
