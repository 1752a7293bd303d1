//! Wire contract of the remote shortening service.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies exchanged with the service

pub mod dto;
