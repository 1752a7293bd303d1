//! Core domain entities of the shortening client.
//!
//! Entities are plain data structures; orchestration lives in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`SubmissionDraft`] - An editable input row of the current batch
//! - [`ShortenOutcome`] - The immutable record of one successful shortening
//! - [`StatEntry`] - Usage statistics for one short link

pub mod draft;
pub mod outcome;
pub mod stats;

pub use draft::{DraftField, DraftState, SubmissionDraft};
pub use outcome::{ShortenOutcome, shortcode_of};
pub use stats::{ClickDetail, StatEntry};
