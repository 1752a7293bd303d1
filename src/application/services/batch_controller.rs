//! Entry point the presentation layer drives: drafts, submissions, statistics.

use std::sync::Arc;

use crate::application::services::{ResultStore, ShortenRequestExecutor, StatsAggregator};
use crate::domain::entities::{DraftField, DraftState, ShortenOutcome, StatEntry, SubmissionDraft};
use crate::domain::gateway::ShortenerApi;
use crate::error::{LimitReached, SubmitError};
use crate::utils::input_validator;
use parking_lot::Mutex;
use tracing::{debug, warn};

/// Maximum number of drafts in one batch.
pub const MAX_DRAFTS: usize = 5;

/// Orchestrates a batch of drafts through validation, shortening and statistics.
///
/// All methods take `&self`. Locks are only held between suspension points, so several
/// `submit` and `request_stats` calls may be in flight at once; each submission is
/// independent of the others.
pub struct BatchController<A: ShortenerApi> {
    drafts: Mutex<Vec<SubmissionDraft>>,
    results: ResultStore,
    executor: ShortenRequestExecutor<A>,
    aggregator: StatsAggregator<A>,
}

impl<A: ShortenerApi> BatchController<A> {
    /// Creates a controller with a single blank draft (id 1).
    pub fn new(api: Arc<A>) -> Self {
        Self {
            drafts: Mutex::new(vec![SubmissionDraft::blank(1)]),
            results: ResultStore::new(),
            executor: ShortenRequestExecutor::new(Arc::clone(&api)),
            aggregator: StatsAggregator::new(api),
        }
    }

    /// Appends a blank draft and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`LimitReached`] if the batch already holds [`MAX_DRAFTS`] drafts; the draft
    /// set is left unchanged.
    pub fn add_draft(&self) -> Result<u32, LimitReached> {
        let mut drafts = self.drafts.lock();
        if drafts.len() >= MAX_DRAFTS {
            debug!(count = drafts.len(), "Draft limit reached");
            return Err(LimitReached { max: MAX_DRAFTS });
        }

        let id = drafts.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        drafts.push(SubmissionDraft::blank(id));
        Ok(id)
    }

    /// Replaces one field of the draft with `id`. Unknown ids are ignored.
    pub fn update_draft(&self, id: u32, field: DraftField, value: impl Into<String>) {
        if let Some(draft) = self.drafts.lock().iter_mut().find(|d| d.id == id) {
            draft.set(field, value);
        }
    }

    /// Snapshot of all drafts in creation order.
    pub fn drafts(&self) -> Vec<SubmissionDraft> {
        self.drafts.lock().clone()
    }

    pub fn draft(&self, id: u32) -> Option<SubmissionDraft> {
        self.drafts.lock().iter().find(|d| d.id == id).cloned()
    }

    /// Snapshot of successful shortenings in completion order.
    pub fn results(&self) -> Vec<ShortenOutcome> {
        self.results.all()
    }

    pub fn result_store(&self) -> &ResultStore {
        &self.results
    }

    /// Validates and shortens the draft with `id`.
    ///
    /// Invalid drafts fail without any network call. On success the outcome is appended to
    /// the result store before it is returned.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::UnknownDraft`] if no draft has this id
    /// - [`SubmitError::Validation`] if the draft's input is invalid
    /// - [`SubmitError::Shorten`] if the service rejected the request or could not be reached
    pub async fn submit(&self, id: u32) -> Result<ShortenOutcome, SubmitError> {
        let draft = {
            let mut drafts = self.drafts.lock();
            let draft = drafts
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or(SubmitError::UnknownDraft(id))?;
            draft.state = DraftState::Submitting;
            draft.clone()
        };

        if let Err(err) = input_validator::validate(&draft.url, &draft.validity) {
            warn!(draft_id = id, error = %err, "Client-side validation failed");
            self.finish(id, DraftState::Failed);
            return Err(err.into());
        }

        match self.executor.execute(&draft).await {
            Ok(outcome) => {
                self.results.append(outcome.clone());
                self.finish(id, DraftState::Succeeded);
                Ok(outcome)
            }
            Err(err) => {
                self.finish(id, DraftState::Failed);
                Err(err.into())
            }
        }
    }

    /// Fetches statistics for every stored outcome.
    ///
    /// Never fails: lookups that fail are left out of the result.
    pub async fn request_stats(&self) -> Vec<StatEntry> {
        let snapshot = self.results.all();
        self.aggregator.refresh(&snapshot).await
    }

    /// The statistics set last published by [`Self::request_stats`].
    pub fn latest_stats(&self) -> Vec<StatEntry> {
        self.aggregator.latest()
    }

    /// Records the end of a submission unless the draft was edited in the meantime.
    fn finish(&self, id: u32, state: DraftState) {
        if let Some(draft) = self.drafts.lock().iter_mut().find(|d| d.id == id)
            && draft.state == DraftState::Submitting
        {
            draft.state = state;
        }
    }
}
