//! Ordered, append-only store of successful shortenings.

use crate::domain::entities::ShortenOutcome;
use parking_lot::RwLock;

/// Outcomes in completion order.
///
/// No deduplication: shortening the same URL twice yields two entries. Appends are
/// serialized by the lock, so concurrent submissions cannot interleave mid-append.
#[derive(Debug, Default)]
pub struct ResultStore {
    outcomes: RwLock<Vec<ShortenOutcome>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an outcome at the end.
    pub fn append(&self, outcome: ShortenOutcome) {
        self.outcomes.write().push(outcome);
    }

    /// Read-only snapshot of all outcomes.
    pub fn all(&self) -> Vec<ShortenOutcome> {
        self.outcomes.read().clone()
    }

    pub fn len(&self) -> usize {
        self.outcomes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.read().is_empty()
    }
}
