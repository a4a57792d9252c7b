//! UI state container and the transitions the controller applies to it.
//!
//! Transitions are plain methods without IO so they can be exercised without
//! a renderer or a network. Asynchronous work is keyed by request ids handed
//! out by the controller; completions carrying any other id are stale and
//! ignored.

mod form;
mod history;
mod inference;
mod status;

pub use form::FormState;
pub use history::HistoryState;
pub use inference::InferenceState;
pub use status::{BackendStatus, StatusBarState, StatusTone};

use crate::api::{ApiError, HistoryEntry, PredictionRequest, PredictionResult};
use crate::schema::SamplePreset;
use crate::task::Task;
use crate::validation;

/// Top-level view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Predict,
    History,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Predict => "Predict",
            Self::History => "History",
        }
    }
}

/// Submission refused locally because at least one field has a hard error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitBlocked {
    pub hard_errors: usize,
}

/// Everything the renderer reads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub tab: Tab,
    pub form: FormState,
    pub inference: InferenceState,
    pub history: HistoryState,
    pub backend: BackendStatus,
    pub status: StatusBarState,
}

impl UiState {
    /// Switch task mode. Values, diagnostics and any result or pending
    /// prediction are dropped. Returns false when `task` is already active.
    pub fn set_task(&mut self, task: Task) -> bool {
        if self.form.task == task {
            return false;
        }
        self.form.reset_for(task);
        self.inference = InferenceState::Idle;
        true
    }

    /// Store one keystroke's worth of input and drop that field's diagnostic.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) {
        self.form.set_field(key, value.into());
    }

    /// Pre-fill every field from a canned sample and drop the shown result.
    pub fn fill_sample(&mut self, preset: SamplePreset) {
        self.form.fill(preset);
        if !self.inference.is_loading() {
            self.inference = InferenceState::Idle;
        }
    }

    /// Explicit reset: values, diagnostics, result, error and pending request.
    pub fn clear(&mut self) {
        self.form.clear();
        self.inference = InferenceState::Idle;
    }

    /// Validate the form and, when nothing blocks, enter `Loading` for
    /// `request_id` and return the payload to send.
    ///
    /// Soft diagnostics stay visible but do not block. A previous result,
    /// error or pending request is replaced immediately.
    pub fn begin_submit(&mut self, request_id: u64) -> Result<PredictionRequest, SubmitBlocked> {
        let schema = self.form.feature_set();
        let errors = validation::validate(&self.form.values, schema);
        let hard_errors = errors.hard_error_count();
        self.form.errors = errors;
        if hard_errors > 0 {
            return Err(SubmitBlocked { hard_errors });
        }
        let request = PredictionRequest::from_inputs(&self.form.values, schema)
            .ok_or(SubmitBlocked { hard_errors: 0 })?;
        self.inference = InferenceState::Loading {
            request_id,
            task: self.form.task,
        };
        Ok(request)
    }

    /// Show a prediction result. Returns false when `request_id` is not the
    /// pending request, in which case nothing changes.
    pub fn finish_submit(&mut self, request_id: u64, result: PredictionResult) -> bool {
        if self.inference.pending_request() != Some(request_id) {
            return false;
        }
        self.inference = InferenceState::Ready(result);
        true
    }

    /// Show a remote failure for the pending request; stale failures are
    /// ignored like stale results.
    pub fn fail_submit(&mut self, request_id: u64, error: ApiError) -> bool {
        if self.inference.pending_request() != Some(request_id) {
            return false;
        }
        self.inference = InferenceState::Failed(error);
        true
    }

    /// Switch view. Leaving the history view abandons its pending fetch.
    /// Returns true when the tab changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.tab == tab {
            return false;
        }
        if self.tab == Tab::History {
            self.history.pending_request = None;
        }
        self.tab = tab;
        true
    }

    /// Mark `request_id` as the only history fetch whose response counts.
    pub fn begin_history(&mut self, request_id: u64) {
        self.history.pending_request = Some(request_id);
        self.history.last_error = None;
    }

    /// Apply a history outcome. Success replaces the cache wholesale; failure
    /// keeps the previous entries. Returns false for stale responses.
    pub fn finish_history(
        &mut self,
        request_id: u64,
        outcome: Result<Vec<HistoryEntry>, ApiError>,
    ) -> bool {
        if self.tab != Tab::History || self.history.pending_request != Some(request_id) {
            return false;
        }
        self.history.pending_request = None;
        match outcome {
            Ok(entries) => {
                self.history.entries = entries;
                self.history.loaded = true;
                self.history.last_error = None;
            }
            Err(err) => self.history.last_error = Some(err.to_string()),
        }
        true
    }

    pub fn set_backend_status(&mut self, status: BackendStatus) {
        self.backend = status;
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.status = StatusBarState::with_tone(text, tone);
    }
}
