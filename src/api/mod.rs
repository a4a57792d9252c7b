//! Client for the remote prediction service.

mod client;
mod types;

pub use client::{HttpBackend, decode_history, decode_prediction};
pub use types::{
    ClassificationResult, ClassifierMetrics, FeatureImportance, HistoryEntry, HistoryResult,
    PredictionRequest, PredictionResult, RegressionResult, RegressorMetrics, Verdict,
};

use crate::task::Task;

/// Failures of a remote call. Every variant is terminal for the call that
/// produced it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("HTTP {status}")]
    Transport { status: u16 },
    /// The service answered successfully but reported a model-side failure.
    #[error("{0}")]
    Model(String),
    /// The request never produced a response (refused, DNS, timeout).
    #[error("API unreachable at {base_url}. Is the prediction service running? ({detail})")]
    NetworkUnreachable { base_url: String, detail: String },
    /// The response body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Operations the client needs from the prediction service.
///
/// Calls block; the controller runs them on background threads.
pub trait PredictionBackend: Send + Sync {
    /// Base URL used in diagnostics.
    fn base_url(&self) -> &str;

    /// Succeeds when the service answers `/health` with a 2xx status.
    fn health(&self) -> Result<(), ApiError>;

    /// Full prediction history, newest first as ordered by the service.
    fn history(&self) -> Result<Vec<HistoryEntry>, ApiError>;

    /// Run one prediction for `task`.
    fn predict(
        &self,
        task: Task,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ApiError>;
}
