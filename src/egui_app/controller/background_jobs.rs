use super::jobs::JobMessage;
use super::*;
use std::sync::mpsc::TryRecvError;

impl EguiController {
    /// Apply every result workers have reported since the last frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            match message {
                JobMessage::HealthChecked(message) => self.handle_health_result(message),
                JobMessage::Predicted(message) => self.handle_prediction_result(message),
                JobMessage::HistoryLoaded(message) => self.handle_history_result(message),
            }
        }
    }
}
