//! HTTP transport for [`crate::domain::gateway::ShortenerApi`].

mod shortener_client;

pub use shortener_client::HttpShortenerApi;
