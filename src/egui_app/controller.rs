//! Controller bridging the prediction service to the egui renderer.
//!
//! All network calls run on worker threads; their results come back over a
//! channel drained once per frame by [`EguiController::poll_background_jobs`].

mod background_jobs;
mod health;
mod history;
mod jobs;
mod prediction;

use crate::api::PredictionBackend;
use crate::egui_app::state::*;
use jobs::ControllerJobs;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maintains app state and dispatches background work.
pub struct EguiController {
    pub ui: UiState,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(backend: Arc<dyn PredictionBackend>) -> Self {
        Self {
            ui: UiState::default(),
            jobs: ControllerJobs::new(backend),
        }
    }

    /// Base URL of the prediction service, for display.
    pub fn base_url(&self) -> &str {
        self.jobs.backend().base_url()
    }

    /// True while any worker has not reported back yet.
    pub fn has_pending_jobs(&self) -> bool {
        self.jobs.in_flight() > 0
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.set_status(text, tone);
    }
}
