//! Orchestration services of the client core.

pub mod batch_controller;
pub mod result_store;
pub mod shorten_executor;
pub mod stats_aggregator;

pub use batch_controller::{BatchController, MAX_DRAFTS};
pub use result_store::ResultStore;
pub use shorten_executor::ShortenRequestExecutor;
pub use stats_aggregator::StatsAggregator;
