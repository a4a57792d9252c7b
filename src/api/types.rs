//! Wire types exchanged with the prediction service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::FeatureSet;
use crate::task::Task;
use crate::validation::{InputValues, parse_number};

/// Numeric payload for one prediction: exactly the keys of the active feature
/// set, each mapped to a finite number.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionRequest {
    values: BTreeMap<String, f64>,
}

impl PredictionRequest {
    /// Parse every feature of `schema` from `values`.
    ///
    /// Returns `None` when any active feature is missing or not a finite
    /// number; keys outside the schema are ignored.
    pub fn from_inputs(values: &InputValues, schema: FeatureSet) -> Option<Self> {
        let values = schema
            .iter()
            .map(|spec| {
                let raw = values.get(spec.key)?;
                parse_number(raw).map(|value| (spec.key.to_string(), value))
            })
            .collect::<Option<BTreeMap<_, _>>>()?;
        Some(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Verdict of the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "FALSE POSITIVE", alias = "FALSE_POSITIVE")]
    FalsePositive,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::FalsePositive => "FALSE POSITIVE",
        }
    }
}

/// Held-out quality of the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierMetrics {
    pub f1: f64,
    pub roc_auc: f64,
}

/// Held-out quality of the regressor, in Earth radii.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegressorMetrics {
    pub rmse: f64,
    pub mae: f64,
}

/// Feature key to model-level weight.
pub type FeatureImportance = BTreeMap<String, f64>;

/// Response of `POST /predict/classification`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub prediction: Verdict,
    pub confidence: f64,
    #[serde(default)]
    pub prob_confirmed: Option<f64>,
    #[serde(default)]
    pub prob_false_positive: Option<f64>,
    #[serde(default)]
    pub model_metrics: Option<ClassifierMetrics>,
    #[serde(default)]
    pub feature_importance: Option<FeatureImportance>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
}

/// Response of `POST /predict/regression`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub prediction_earth_radii: f64,
    #[serde(default)]
    pub size_category: Option<String>,
    #[serde(default)]
    pub confidence_interval: Option<[f64; 2]>,
    #[serde(default)]
    pub model_metrics: Option<RegressorMetrics>,
    #[serde(default)]
    pub feature_importance: Option<FeatureImportance>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
}

/// A decoded prediction for either task.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictionResult {
    Classification(ClassificationResult),
    Regression(RegressionResult),
}

impl PredictionResult {
    pub fn task(&self) -> Task {
        match self {
            Self::Classification(_) => Task::Classification,
            Self::Regression(_) => Task::Regression,
        }
    }

    pub fn latency_ms(&self) -> Option<f64> {
        match self {
            Self::Classification(result) => result.latency_ms,
            Self::Regression(result) => result.latency_ms,
        }
    }

    pub fn feature_importance(&self) -> Option<&FeatureImportance> {
        match self {
            Self::Classification(result) => result.feature_importance.as_ref(),
            Self::Regression(result) => result.feature_importance.as_ref(),
        }
    }
}

/// Summary stored by the service for a past prediction. Only the fields the
/// history view shows are decoded.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HistoryResult {
    #[serde(default)]
    pub prediction: Option<Verdict>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub prediction_earth_radii: Option<f64>,
    #[serde(default)]
    pub size_category: Option<String>,
}

/// One row of `GET /history`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub task: Task,
    /// Naive UTC ISO-8601 timestamp as written by the service.
    pub timestamp: String,
    #[serde(default)]
    pub result: HistoryResult,
    #[serde(default)]
    pub latency_ms: Option<f64>,
}
