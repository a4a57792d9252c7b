use serde_json::Value;
use tracing::{debug, warn};

use super::types::{
    ClassificationResult, HistoryEntry, PredictionRequest, PredictionResult, RegressionResult,
};
use super::{ApiError, PredictionBackend};
use crate::config::ApiConfig;
use crate::http_client;
use crate::task::Task;

const MAX_HEALTH_RESPONSE_BYTES: usize = 64 * 1024;
const MAX_PREDICTION_RESPONSE_BYTES: usize = 1024 * 1024;
const MAX_HISTORY_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// [`PredictionBackend`] speaking JSON over HTTP.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn unreachable(&self, err: ureq::Transport) -> ApiError {
        ApiError::NetworkUnreachable {
            base_url: self.config.base_url().to_string(),
            detail: err.to_string(),
        }
    }

    fn map_call_error(&self, err: ureq::Error) -> ApiError {
        match err {
            ureq::Error::Status(status, _) => ApiError::Transport { status },
            ureq::Error::Transport(err) => self.unreachable(err),
        }
    }
}

/// ureq only fails on 4xx/5xx; any other non-2xx final status is a failure too.
fn require_success(response: ureq::Response) -> Result<ureq::Response, ApiError> {
    let status = response.status();
    if (200..300).contains(&status) {
        Ok(response)
    } else {
        Err(ApiError::Transport { status })
    }
}

impl PredictionBackend for HttpBackend {
    fn base_url(&self) -> &str {
        self.config.base_url()
    }

    fn health(&self) -> Result<(), ApiError> {
        let url = self.config.endpoint("/health");
        let response = http_client::agent()
            .get(&url)
            .call()
            .map_err(|err| self.map_call_error(err))
            .and_then(require_success)?;
        // The body carries no contract; drain it so the connection can be reused.
        let _ = http_client::read_response_bytes(response, MAX_HEALTH_RESPONSE_BYTES);
        Ok(())
    }

    fn history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let url = self.config.endpoint("/history");
        let response = http_client::agent()
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(|err| self.map_call_error(err))
            .and_then(require_success)?;
        let body = http_client::read_response_text(response, MAX_HISTORY_RESPONSE_BYTES)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        decode_history(&body)
    }

    fn predict(
        &self,
        task: Task,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ApiError> {
        let url = self.config.endpoint(task.endpoint());
        debug!("POST {url} with {} features", request.len());
        let response = http_client::agent()
            .post(&url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json")
            .send_json(request)
            .map_err(|err| self.map_call_error(err))
            .and_then(require_success)?;
        let body = http_client::read_response_text(response, MAX_PREDICTION_RESPONSE_BYTES)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        decode_prediction(task, &body)
    }
}

/// Decode a successful prediction body for `task`.
///
/// A body carrying a non-null `error` field is a model-side failure and is
/// reported verbatim.
pub fn decode_prediction(task: Task, body: &str) -> Result<PredictionResult, ApiError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Decode("Empty response body".to_string()));
    }
    let value: Value =
        serde_json::from_str(trimmed).map_err(|err| ApiError::Decode(err.to_string()))?;
    if let Some(message) = model_error(&value) {
        return Err(ApiError::Model(message));
    }
    let decoded = match task {
        Task::Classification => serde_json::from_value::<ClassificationResult>(value)
            .map(PredictionResult::Classification),
        Task::Regression => {
            serde_json::from_value::<RegressionResult>(value).map(PredictionResult::Regression)
        }
    };
    decoded.map_err(|err| ApiError::Decode(err.to_string()))
}

fn model_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

/// Decode a history body. Anything other than a JSON array is an empty
/// history; entries that do not decode are skipped.
pub fn decode_history(body: &str) -> Result<Vec<HistoryEntry>, ApiError> {
    let value: Value =
        serde_json::from_str(body.trim()).map_err(|err| ApiError::Decode(err.to_string()))?;
    let Value::Array(items) = value else {
        warn!("History response was not an array; treating as empty");
        return Ok(Vec::new());
    };
    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<HistoryEntry>(item) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!("Skipping history entry {index}: {err}"),
        }
    }
    Ok(entries)
}
