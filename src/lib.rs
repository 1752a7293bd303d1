//! # URL Shortener Client
//!
//! Request-orchestration core for a batch URL shortening client: validates up to
//! [`MAX_DRAFTS`](application::services::MAX_DRAFTS) submissions, sends one shortening request
//! per submission, keeps the successful results, and aggregates per-link statistics by
//! querying the service once per known short link.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Drafts, outcomes, statistics and the service trait
//! - **Application Layer** ([`application`]) - Validation, shortening and aggregation flow
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` client for the service
//! - **API Layer** ([`api`]) - Wire DTOs of the service contract
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use url_shortener_client::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = url_shortener_client::config::load_from_env()?;
//! let api = Arc::new(HttpShortenerApi::from_config(&config)?);
//! let controller = BatchController::new(api);
//!
//! controller.update_draft(1, DraftField::Url, "https://example.com");
//! let outcome = controller.submit(1).await?;
//! println!("{}", outcome.short_link);
//!
//! let stats = controller.request_stats().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Client configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod config;
pub mod telemetry;

pub use error::{ShortenError, SubmitError, ValidationError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BatchController, MAX_DRAFTS, ResultStore};
    pub use crate::domain::entities::{
        DraftField, DraftState, ShortenOutcome, StatEntry, SubmissionDraft,
    };
    pub use crate::domain::gateway::ShortenerApi;
    pub use crate::error::{LimitReached, ShortenError, SubmitError, ValidationError};
    pub use crate::infrastructure::http::HttpShortenerApi;
}
