use super::jobs::HistoryJobResult;
use super::*;

impl EguiController {
    /// Switch views. Entering the history view always refetches.
    pub fn select_tab(&mut self, tab: Tab) {
        if !self.ui.select_tab(tab) {
            return;
        }
        if tab == Tab::History {
            self.refresh_history();
        }
    }

    /// Fetch the history again; only the newest fetch's response is kept.
    pub fn refresh_history(&mut self) {
        if self.ui.tab != Tab::History {
            return;
        }
        let request_id = self.jobs.next_request_id();
        self.ui.begin_history(request_id);
        debug!(request_id, "fetching prediction history");
        self.set_status("Loading history…", StatusTone::Busy);
        self.jobs.begin_history_fetch(request_id);
    }

    pub(super) fn handle_history_result(&mut self, message: HistoryJobResult) {
        let HistoryJobResult { request_id, result } = message;
        let (text, tone) = match &result {
            Ok(entries) => (history_status(entries.len()), StatusTone::Info),
            Err(err) => {
                warn!(request_id, error = %err, "history fetch failed");
                (format!("History unavailable: {err}"), StatusTone::Error)
            }
        };
        if !self.ui.finish_history(request_id, result) {
            debug!(request_id, "dropping stale history response");
            return;
        }
        self.set_status(text, tone);
    }
}

fn history_status(count: usize) -> String {
    match count {
        0 => "No predictions yet".to_string(),
        1 => "Loaded 1 prediction".to_string(),
        n => format!("Loaded {n} predictions"),
    }
}
