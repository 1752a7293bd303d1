//! Application layer services implementing the client's request orchestration.
//!
//! Services consume the [`crate::domain::gateway::ShortenerApi`] trait and provide the API
//! the presentation layer calls.
//!
//! # Available Services
//!
//! - [`services::shorten_executor::ShortenRequestExecutor`] - One shortening request, classified result
//! - [`services::result_store::ResultStore`] - Successful outcomes in completion order
//! - [`services::stats_aggregator::StatsAggregator`] - Concurrent per-link statistics lookup
//! - [`services::batch_controller::BatchController`] - Drafts, submissions and statistics

pub mod services;
