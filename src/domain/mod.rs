//! Domain layer containing client entities and the remote-service seam.
//!
//! # Architecture
//!
//! - [`entities`] - Drafts, outcomes and statistics
//! - [`gateway`] - Trait describing the remote shortening service
//!
//! The domain layer has no dependency on the HTTP transport. The transport lives in
//! [`crate::infrastructure::http`] and implements [`gateway::ShortenerApi`].

pub mod entities;
pub mod gateway;
