use super::jobs::HealthCheckResult;
use super::*;

impl EguiController {
    /// Probe `/health` in the background to drive the status indicator.
    pub fn check_health(&mut self) {
        debug!(base_url = self.base_url(), "probing prediction service");
        self.jobs.begin_health_check();
    }

    pub(super) fn handle_health_result(&mut self, message: HealthCheckResult) {
        match message.result {
            Ok(()) => {
                info!(base_url = self.base_url(), "prediction service online");
                self.ui.set_backend_status(BackendStatus::Online);
            }
            Err(err) => {
                warn!(error = %err, "prediction service offline");
                self.ui.set_backend_status(BackendStatus::Offline);
                self.set_status(err.to_string(), StatusTone::Warning);
            }
        }
    }
}
