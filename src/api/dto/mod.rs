//! Data Transfer Objects for service requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Success bodies are decoded
//! strictly and checked with `validator` before they become domain values; error bodies are
//! decoded leniently.

pub mod error_body;
pub mod shorten;
pub mod stats;

pub use error_body::ApiErrorBody;
pub use shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
pub use stats::{ClickRecord, StatsResponse};
