//! Submission draft entity: one editable input row of a batch.

/// Lifecycle of a draft.
///
/// `Failed` and `Succeeded` both allow further edits and resubmission; editing moves the
/// draft back to `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftState {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Editable field of a [`SubmissionDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Url,
    Validity,
    Shortcode,
}

/// A pending, user-editable shortening request.
///
/// Fields hold raw user input; `validity` is the text typed into the minutes field and is
/// only interpreted by the validator at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub id: u32,
    pub url: String,
    pub validity: String,
    pub shortcode: String,
    pub state: DraftState,
}

impl SubmissionDraft {
    /// Creates a draft with blank fields.
    pub fn blank(id: u32) -> Self {
        Self {
            id,
            url: String::new(),
            validity: String::new(),
            shortcode: String::new(),
            state: DraftState::Editing,
        }
    }

    /// Replaces one field and returns the draft to `Editing`.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Url => self.url = value,
            DraftField::Validity => self.validity = value,
            DraftField::Shortcode => self.shortcode = value,
        }
        self.state = DraftState::Editing;
    }

    /// The custom shortcode, if one was entered.
    pub fn custom_shortcode(&self) -> Option<&str> {
        let code = self.shortcode.trim();
        (!code.is_empty()).then_some(code)
    }
}
