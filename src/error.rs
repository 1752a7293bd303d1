//! Typed failures surfaced by the client core.
//!
//! Nothing in the core panics or aborts on a remote failure. Every error here is a value the
//! presentation layer can render, and each carries the message shown to the user via `Display`.

use thiserror::Error;

/// Generic message used when the service rejects a request without explaining why.
pub const UNKNOWN_REMOTE_ERROR: &str = "An unknown error occurred.";

/// Client-side input problems, detected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("URL cannot be empty.")]
    EmptyUrl,

    #[error("Invalid URL format.")]
    MalformedUrl,

    #[error("Validity must be a positive integer in minutes.")]
    InvalidValidity,
}

/// Failure of a single shortening request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    /// The service answered with a non-success status.
    #[error("{0}")]
    RemoteRejected(String),

    /// The service could not be reached, timed out, or sent an undecodable body.
    #[error("Could not connect to the backend service: {0}")]
    NetworkFailure(String),
}

impl ShortenError {
    pub fn remote_rejected(detail: Option<String>) -> Self {
        Self::RemoteRejected(detail.unwrap_or_else(|| UNKNOWN_REMOTE_ERROR.to_string()))
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::NetworkFailure(detail.into())
    }

    /// Short title for an alert dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::RemoteRejected(_) => "Error Shortening URL",
            Self::NetworkFailure(_) => "Network Error",
        }
    }
}

/// Failure of one statistics sub-request. Never escapes the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsFetchError {
    #[error("statistics rejected with status {status}: {detail}")]
    Rejected { status: u16, detail: String },

    #[error("statistics request failed: {0}")]
    Network(String),
}

/// Returned by `add_draft` when the batch is already full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("You can shorten up to {max} URLs concurrently.")]
pub struct LimitReached {
    pub max: usize,
}

impl LimitReached {
    pub fn title(&self) -> &'static str {
        "Limit Reached"
    }
}

/// Raw failure of a call through [`crate::domain::gateway::ShortenerApi`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response. `detail` is taken from the body's `detail` or `error` field.
    #[error("service responded with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn rejected(status: u16, detail: Option<String>) -> Self {
        Self::Rejected { status, detail }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

impl From<ApiError> for ShortenError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { detail, .. } => ShortenError::remote_rejected(detail),
            ApiError::Transport(msg) | ApiError::Decode(msg) => ShortenError::network(msg),
        }
    }
}

impl From<ApiError> for StatsFetchError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { status, detail } => StatsFetchError::Rejected {
                status,
                detail: detail.unwrap_or_else(|| UNKNOWN_REMOTE_ERROR.to_string()),
            },
            ApiError::Transport(msg) | ApiError::Decode(msg) => StatsFetchError::Network(msg),
        }
    }
}

/// Everything `submit` can return instead of an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("No draft with id {0}")]
    UnknownDraft(u32),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Shorten(#[from] ShortenError),
}

impl SubmitError {
    /// Short title for an alert dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::UnknownDraft(_) => "Unknown Draft",
            Self::Validation(_) => "Validation Error",
            Self::Shorten(err) => err.title(),
        }
    }
}
