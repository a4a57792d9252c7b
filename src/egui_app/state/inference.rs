use crate::api::{ApiError, PredictionResult};
use crate::task::Task;

/// Lifecycle of the current prediction.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InferenceState {
    /// Nothing submitted since the last reset.
    #[default]
    Idle,
    /// Waiting for the response to `request_id`.
    Loading { request_id: u64, task: Task },
    /// Last submission succeeded.
    Ready(PredictionResult),
    /// Last submission failed remotely.
    Failed(ApiError),
}

impl InferenceState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Request id the UI is currently waiting for.
    pub fn pending_request(&self) -> Option<u64> {
        match self {
            Self::Loading { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}
