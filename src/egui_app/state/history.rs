use crate::api::HistoryEntry;

/// Read-through cache of the service's prediction history.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryState {
    /// Entries from the most recent successful fetch.
    pub entries: Vec<HistoryEntry>,
    /// Fetch whose response will be accepted, if any.
    pub pending_request: Option<u64>,
    /// True once any fetch has completed successfully.
    pub loaded: bool,
    /// Message of the last failed fetch.
    pub last_error: Option<String>,
}

impl HistoryState {
    pub fn is_loading(&self) -> bool {
        self.pending_request.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
