use super::jobs::{PredictionJob, PredictionJobResult};
use super::*;
use crate::api::ApiError;
use crate::schema::SamplePreset;
use crate::task::Task;

impl EguiController {
    /// Switch between classification and regression.
    pub fn set_task(&mut self, task: Task) {
        if self.ui.set_task(task) {
            debug!(task = task.label(), "task switched");
            self.set_status(format!("{} mode", task.label()), StatusTone::Idle);
        }
    }

    pub fn set_field(&mut self, key: &str, value: impl Into<String>) {
        self.ui.set_field(key, value);
    }

    pub fn fill_sample(&mut self, preset: SamplePreset) {
        self.ui.fill_sample(preset);
        self.set_status(format!("Loaded {}", preset.label()), StatusTone::Info);
    }

    pub fn clear_form(&mut self) {
        self.ui.clear();
        self.set_status("Form cleared", StatusTone::Idle);
    }

    /// Validate and, when nothing blocks, send the form to the service.
    ///
    /// Any prediction already in flight is superseded; its response will be
    /// dropped when it arrives.
    pub fn submit(&mut self) {
        let request_id = self.jobs.next_request_id();
        let task = self.ui.form.task;
        let request = match self.ui.begin_submit(request_id) {
            Ok(request) => request,
            Err(blocked) => {
                let noun = if blocked.hard_errors == 1 { "field needs" } else { "fields need" };
                self.set_status(
                    format!("{} {noun} attention", blocked.hard_errors),
                    StatusTone::Warning,
                );
                return;
            }
        };
        info!(request_id, task = task.label(), features = request.len(), "submitting prediction");
        self.set_status(format!("Running {}…", task.label().to_lowercase()), StatusTone::Busy);
        self.jobs.begin_prediction(PredictionJob {
            request_id,
            task,
            request,
        });
    }

    pub(super) fn handle_prediction_result(&mut self, message: PredictionJobResult) {
        let PredictionJobResult {
            request_id,
            task,
            result,
        } = message;
        let (text, tone) = match &result {
            Ok(prediction) => (completed_status(prediction.latency_ms()), StatusTone::Info),
            Err(err) => (failure_status(err), StatusTone::Error),
        };
        if let Err(err) = &result {
            warn!(request_id, task = task.label(), error = %err, "prediction failed");
        }
        let applied = match result {
            Ok(prediction) => self.ui.finish_submit(request_id, prediction),
            Err(err) => self.ui.fail_submit(request_id, err),
        };
        if !applied {
            debug!(request_id, "dropping superseded prediction response");
            return;
        }
        self.set_status(text, tone);
    }
}

fn completed_status(latency_ms: Option<f64>) -> String {
    match latency_ms {
        Some(latency) => format!("Prediction ready in {latency:.1} ms"),
        None => "Prediction ready".to_string(),
    }
}

fn failure_status(err: &ApiError) -> String {
    match err {
        ApiError::NetworkUnreachable { .. } => "Prediction service unreachable".to_string(),
        other => format!("Prediction failed: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_status_mentions_latency_when_known() {
        assert_eq!(completed_status(Some(12.34)), "Prediction ready in 12.3 ms");
        assert_eq!(completed_status(None), "Prediction ready");
    }

    #[test]
    fn unreachable_failure_gets_short_status() {
        let err = ApiError::NetworkUnreachable {
            base_url: "http://localhost:5000".into(),
            detail: "refused".into(),
        };
        assert_eq!(failure_status(&err), "Prediction service unreachable");
        assert_eq!(
            failure_status(&ApiError::Transport { status: 502 }),
            "Prediction failed: HTTP 502"
        );
    }
}
