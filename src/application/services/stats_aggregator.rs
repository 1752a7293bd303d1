//! Fan-out/fan-in collection of per-link statistics.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::{ShortenOutcome, StatEntry};
use crate::domain::gateway::ShortenerApi;
use crate::error::StatsFetchError;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use parking_lot::Mutex;
use tracing::{info, warn};

/// Last published statistics set and the refresh that produced it.
#[derive(Debug, Default)]
struct Published {
    generation: u64,
    entries: Vec<StatEntry>,
}

/// Fetches statistics for every known short link concurrently.
///
/// Individual failures are logged and dropped; a refresh as a whole never fails.
///
/// # Overlapping refreshes
///
/// Each refresh returns its own complete result to its caller. The set kept in
/// [`StatsAggregator::latest`] belongs to the most recently *started* refresh: a slower,
/// older refresh finishing late does not overwrite it.
pub struct StatsAggregator<A: ShortenerApi> {
    api: Arc<A>,
    generation: AtomicU64,
    published: Mutex<Published>,
}

impl<A: ShortenerApi> StatsAggregator<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            generation: AtomicU64::new(0),
            published: Mutex::new(Published::default()),
        }
    }

    /// Fetches statistics for every outcome in `snapshot`.
    ///
    /// One request per outcome, all in flight at once. Entries are returned in completion
    /// order; failed lookups are omitted. An empty snapshot issues no requests.
    pub async fn refresh(&self, snapshot: &[ShortenOutcome]) -> Vec<StatEntry> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if snapshot.is_empty() {
            self.publish(generation, Vec::new());
            return Vec::new();
        }

        info!(count = snapshot.len(), "Fetching statistics for shortened URLs");

        let api = &self.api;
        let mut pending: FuturesUnordered<_> = snapshot
            .iter()
            .map(ShortenOutcome::shortcode)
            .filter(|code| {
                if code.is_empty() {
                    warn!("Skipping short link without a shortcode");
                }
                !code.is_empty()
            })
            .map(|code| async move {
                let result = api.fetch_stats(code).await.map_err(StatsFetchError::from);
                (code, result)
            })
            .collect();

        let mut entries = Vec::with_capacity(pending.len());
        let mut failed = 0usize;

        while let Some((code, result)) = pending.next().await {
            match result {
                Ok(entry) => entries.push(entry),
                Err(StatsFetchError::Rejected { status, detail }) => {
                    failed += 1;
                    warn!(
                        shortcode = code,
                        status,
                        detail = %detail,
                        "Error fetching stats for shortcode"
                    );
                }
                Err(StatsFetchError::Network(error)) => {
                    failed += 1;
                    warn!(
                        shortcode = code,
                        error = %error,
                        "Network error fetching stats for shortcode"
                    );
                }
            }
        }

        info!(count = entries.len(), failed, "Statistics fetched");

        self.publish(generation, entries.clone());
        entries
    }

    /// The statistics set of the most recent refresh that has completed, in the sense
    /// described on the type.
    pub fn latest(&self) -> Vec<StatEntry> {
        self.published.lock().entries.clone()
    }

    fn publish(&self, generation: u64, entries: Vec<StatEntry>) {
        let mut published = self.published.lock();
        if generation >= published.generation {
            published.generation = generation;
            published.entries = entries;
        }
    }
}
