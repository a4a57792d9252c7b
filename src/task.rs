//! Task modes offered by the prediction service.

use serde::{Deserialize, Serialize};

/// Which model the next submission targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Confirmed planet vs. false positive.
    #[default]
    Classification,
    /// Planet radius in Earth radii.
    Regression,
}

impl Task {
    pub const ALL: [Task; 2] = [Task::Classification, Task::Regression];

    /// Service path for predictions of this task.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Classification => "/predict/classification",
            Self::Regression => "/predict/regression",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Classification => "Classification",
            Self::Regression => "Regression",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Classification => "CONFIRMED vs FALSE POSITIVE",
            Self::Regression => "Predict planetary radius",
        }
    }

    /// Short badge used in the history list.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Classification => "CLASSIFY",
            Self::Regression => "REGRESS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_distinct_per_task() {
        assert_eq!(Task::Classification.endpoint(), "/predict/classification");
        assert_eq!(Task::Regression.endpoint(), "/predict/regression");
    }

    #[test]
    fn serializes_as_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&Task::Regression).unwrap(),
            "\"regression\""
        );
        let task: Task = serde_json::from_str("\"classification\"").unwrap();
        assert_eq!(task, Task::Classification);
    }
}
