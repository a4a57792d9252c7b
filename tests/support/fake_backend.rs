use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use exoscope::api::{
    ApiError, ClassificationResult, HistoryEntry, PredictionBackend, PredictionRequest,
    PredictionResult, RegressionResult, Verdict,
};
use exoscope::egui_app::controller::EguiController;
use exoscope::task::Task;

type PredictAnswer = (Duration, Result<PredictionResult, ApiError>);
type PredictFn = Box<dyn Fn(Task, &PredictionRequest) -> PredictAnswer + Send + Sync>;

/// In-memory [`PredictionBackend`] with scripted answers and call counters.
pub struct FakeBackend {
    health: Result<(), ApiError>,
    history: Mutex<Vec<(Duration, Result<Vec<HistoryEntry>, ApiError>)>>,
    predict: PredictFn,
    pub predict_calls: AtomicUsize,
    pub history_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            health: Ok(()),
            history: Mutex::new(Vec::new()),
            predict: Box::new(|task, _| (Duration::ZERO, Ok(default_result(task)))),
            predict_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
        }
    }

    pub fn offline(mut self) -> Self {
        self.health = Err(ApiError::NetworkUnreachable {
            base_url: "fake://".into(),
            detail: "connection refused".into(),
        });
        self
    }

    pub fn with_predict(
        mut self,
        predict: impl Fn(Task, &PredictionRequest) -> (Duration, Result<PredictionResult, ApiError>)
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.predict = Box::new(predict);
        self
    }

    /// Queue answers for successive history fetches, in call order.
    pub fn with_history(
        self,
        answers: Vec<(Duration, Result<Vec<HistoryEntry>, ApiError>)>,
    ) -> Self {
        *self.history.lock().unwrap_or_else(|err| err.into_inner()) = answers;
        self
    }
}

impl PredictionBackend for FakeBackend {
    fn base_url(&self) -> &str {
        "fake://"
    }

    fn health(&self) -> Result<(), ApiError> {
        self.health.clone()
    }

    fn history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let call = self.history_calls.fetch_add(1, Ordering::SeqCst);
        let answer = {
            let answers = self.history.lock().unwrap_or_else(|err| err.into_inner());
            answers.get(call).cloned()
        };
        match answer {
            Some((delay, result)) => {
                thread::sleep(delay);
                result
            }
            None => Ok(Vec::new()),
        }
    }

    fn predict(
        &self,
        task: Task,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ApiError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        let (delay, result) = (self.predict)(task, request);
        thread::sleep(delay);
        result
    }
}

pub fn classification(verdict: Verdict, prob_confirmed: f64) -> PredictionResult {
    PredictionResult::Classification(ClassificationResult {
        prediction: verdict,
        confidence: prob_confirmed.max(1.0 - prob_confirmed),
        prob_confirmed: Some(prob_confirmed),
        prob_false_positive: Some(1.0 - prob_confirmed),
        model_metrics: None,
        feature_importance: None,
        latency_ms: Some(1.0),
    })
}

pub fn regression(radius: f64) -> PredictionResult {
    PredictionResult::Regression(RegressionResult {
        prediction_earth_radii: radius,
        size_category: None,
        confidence_interval: None,
        model_metrics: None,
        feature_importance: None,
        latency_ms: Some(1.0),
    })
}

fn default_result(task: Task) -> PredictionResult {
    match task {
        Task::Classification => classification(Verdict::Confirmed, 0.92),
        Task::Regression => regression(2.0),
    }
}

/// Poll the controller until every background job reported back.
pub fn drain_jobs(controller: &mut EguiController) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        controller.poll_background_jobs();
        if !controller.has_pending_jobs() {
            return;
        }
        assert!(Instant::now() < deadline, "background jobs did not finish");
        thread::sleep(Duration::from_millis(5));
    }
}
