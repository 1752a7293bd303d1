//! Helper functions used across the client.
//!
//! - [`input_validator`] - Client-side checks of a submission
//! - [`timestamp`] - Lenient ISO-8601 decoding for service responses

pub mod input_validator;
pub mod timestamp;
