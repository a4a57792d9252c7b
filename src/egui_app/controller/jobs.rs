use crate::api::{ApiError, HistoryEntry, PredictionBackend, PredictionRequest, PredictionResult};
use crate::task::Task;
use std::sync::{
    Arc,
    mpsc::{Receiver, Sender, TryRecvError},
};
use std::thread;

pub(crate) enum JobMessage {
    HealthChecked(HealthCheckResult),
    Predicted(PredictionJobResult),
    HistoryLoaded(HistoryJobResult),
}

#[derive(Debug)]
pub(crate) struct HealthCheckResult {
    pub(crate) result: Result<(), ApiError>,
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) request_id: u64,
    pub(crate) task: Task,
    pub(crate) request: PredictionRequest,
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) request_id: u64,
    pub(crate) task: Task,
    pub(crate) result: Result<PredictionResult, ApiError>,
}

#[derive(Debug)]
pub(crate) struct HistoryJobResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<Vec<HistoryEntry>, ApiError>,
}

/// Owns the channel background workers report through.
pub(crate) struct ControllerJobs {
    backend: Arc<dyn PredictionBackend>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    in_flight: usize,
}

impl ControllerJobs {
    pub(super) fn new(backend: Arc<dyn PredictionBackend>) -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            backend,
            message_tx,
            message_rx,
            next_request_id: 0,
            in_flight: 0,
        }
    }

    pub(super) fn backend(&self) -> &Arc<dyn PredictionBackend> {
        &self.backend
    }

    pub(super) fn next_request_id(&mut self) -> u64 {
        self.next_request_id = self.next_request_id.wrapping_add(1);
        self.next_request_id
    }

    pub(super) fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(super) fn try_recv_message(&mut self) -> Result<JobMessage, TryRecvError> {
        let message = self.message_rx.try_recv()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Ok(message)
    }

    pub(super) fn begin_health_check(&mut self) {
        self.in_flight += 1;
        let backend = Arc::clone(&self.backend);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = backend.health();
            let _ = tx.send(JobMessage::HealthChecked(HealthCheckResult { result }));
        });
    }

    pub(super) fn begin_prediction(&mut self, job: PredictionJob) {
        self.in_flight += 1;
        let backend = Arc::clone(&self.backend);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = backend.predict(job.task, &job.request);
            let _ = tx.send(JobMessage::Predicted(PredictionJobResult {
                request_id: job.request_id,
                task: job.task,
                result,
            }));
        });
    }

    pub(super) fn begin_history_fetch(&mut self, request_id: u64) {
        self.in_flight += 1;
        let backend = Arc::clone(&self.backend);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = backend.history();
            let _ = tx.send(JobMessage::HistoryLoaded(HistoryJobResult { request_id, result }));
        });
    }
}
