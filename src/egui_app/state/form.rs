use crate::schema::{FeatureSet, SamplePreset};
use crate::task::Task;
use crate::validation::{InputValues, ValidationErrors};

/// Form inputs for the active task.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    /// Active task; decides which features are shown and sent.
    pub task: Task,
    /// Raw text per feature key.
    pub values: InputValues,
    /// Diagnostics from the last submit attempt, minus edited fields.
    pub errors: ValidationErrors,
}

impl FormState {
    pub fn feature_set(&self) -> FeatureSet {
        FeatureSet::for_task(self.task)
    }

    /// Raw value of a field, empty when never edited.
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Switch task, discarding values and diagnostics.
    pub(crate) fn reset_for(&mut self, task: Task) {
        self.task = task;
        self.values.clear();
        self.errors.clear();
    }

    pub(crate) fn set_field(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        self.errors.remove(key);
    }

    /// Replace all values with a canned sample. Keys outside the active
    /// feature set are kept but never sent.
    pub(crate) fn fill(&mut self, preset: SamplePreset) {
        self.values = preset
            .values()
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        self.errors.clear();
    }

    pub(crate) fn clear(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}
