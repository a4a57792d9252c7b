//! Per-field validation of raw form input against the feature schema.

use std::collections::BTreeMap;

use crate::schema::{FeatureSet, FeatureSpec};

/// Raw, pre-parse form values keyed by feature key.
pub type InputValues = BTreeMap<String, String>;

pub const REQUIRED_MESSAGE: &str = "Required";
pub const NOT_A_NUMBER_MESSAGE: &str = "Must be a number";

/// Whether a diagnostic blocks submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// The value cannot be sent.
    Hard,
    /// The value is unusual but still usable.
    Soft,
}

/// A single diagnostic attached to one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDiagnostic {
    pub severity: Severity,
    pub message: String,
}

impl FieldDiagnostic {
    fn required() -> Self {
        Self {
            severity: Severity::Hard,
            message: REQUIRED_MESSAGE.to_string(),
        }
    }

    fn not_a_number() -> Self {
        Self {
            severity: Severity::Hard,
            message: NOT_A_NUMBER_MESSAGE.to_string(),
        }
    }

    fn unusual(spec: &FeatureSpec) -> Self {
        Self {
            severity: Severity::Soft,
            message: format!("Unusual value (typical range: {}–{})", spec.min, spec.max),
        }
    }

    pub fn is_hard(&self) -> bool {
        self.severity == Severity::Hard
    }
}

/// Diagnostics for the fields that have one. Clean fields are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, FieldDiagnostic>,
}

impl ValidationErrors {
    pub fn get(&self, key: &str) -> Option<&FieldDiagnostic> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when at least one diagnostic blocks submission.
    pub fn has_hard_errors(&self) -> bool {
        self.fields.values().any(FieldDiagnostic::is_hard)
    }

    pub fn hard_error_count(&self) -> usize {
        self.fields.values().filter(|diag| diag.is_hard()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDiagnostic)> {
        self.fields.iter().map(|(key, diag)| (key.as_str(), diag))
    }

    /// Drop the diagnostic of a single field, e.g. after it was edited.
    pub fn remove(&mut self, key: &str) {
        self.fields.remove(key);
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    fn insert(&mut self, key: &str, diagnostic: FieldDiagnostic) {
        self.fields.insert(key.to_string(), diagnostic);
    }
}

/// Check every feature of `schema` against `values`.
pub fn validate(values: &InputValues, schema: FeatureSet) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for spec in schema.iter() {
        if let Some(diagnostic) = check_field(values.get(spec.key).map(String::as_str), spec) {
            errors.insert(spec.key, diagnostic);
        }
    }
    errors
}

fn check_field(raw: Option<&str>, spec: &FeatureSpec) -> Option<FieldDiagnostic> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Some(FieldDiagnostic::required());
    }
    let Some(value) = parse_number(raw) else {
        return Some(FieldDiagnostic::not_a_number());
    };
    if is_unusual(value, spec) {
        return Some(FieldDiagnostic::unusual(spec));
    }
    None
}

/// Parse a raw field into a finite number.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn is_unusual(value: f64, spec: &FeatureSpec) -> bool {
    value < spec.min - spec.min.abs() * 0.5 || value > spec.max * 5.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CLF_FEATURES;
    use crate::task::Task;

    fn filled(task: Task) -> InputValues {
        FeatureSet::for_task(task)
            .iter()
            .map(|spec| (spec.key.to_string(), spec.median.to_string()))
            .collect()
    }

    #[test]
    fn medians_validate_cleanly() {
        let task = Task::Classification;
        let errors = validate(&filled(task), FeatureSet::for_task(task));
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn missing_field_is_flagged_required() {
        let mut values = filled(Task::Regression);
        values.remove("st_teff");
        let errors = validate(&values, FeatureSet::for_task(Task::Regression));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("st_teff").unwrap().message, REQUIRED_MESSAGE);
        assert!(errors.has_hard_errors());
    }

    #[test]
    fn blank_field_is_flagged_required() {
        let mut values = filled(Task::Regression);
        values.insert("koi_depth".into(), "   ".into());
        let errors = validate(&values, FeatureSet::for_task(Task::Regression));
        assert_eq!(errors.get("koi_depth").unwrap().message, REQUIRED_MESSAGE);
    }

    #[test]
    fn non_numeric_is_flagged() {
        let mut values = filled(Task::Classification);
        values.insert("koi_period".into(), "abc".into());
        values.insert("koi_impact".into(), "1.2.3".into());
        values.insert("koi_depth".into(), "NaN".into());
        let errors = validate(&values, FeatureSet::for_task(Task::Classification));
        for key in ["koi_period", "koi_impact", "koi_depth"] {
            assert_eq!(errors.get(key).unwrap().message, NOT_A_NUMBER_MESSAGE, "{key}");
        }
    }

    #[test]
    fn sign_and_bare_decimal_forms_are_accepted() {
        assert_eq!(parse_number("-.5"), Some(-0.5));
        assert_eq!(parse_number("+3."), Some(3.0));
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn exact_bounds_never_warn() {
        let set = FeatureSet::for_task(Task::Classification);
        for spec in &CLF_FEATURES {
            for bound in [spec.min, spec.max] {
                let mut values = filled(Task::Classification);
                values.insert(spec.key.to_string(), bound.to_string());
                let errors = validate(&values, set);
                assert!(errors.get(spec.key).is_none(), "{} at {bound}", spec.key);
            }
        }
    }

    #[test]
    fn far_out_of_range_values_warn_softly() {
        let set = FeatureSet::for_task(Task::Classification);
        let mut values = filled(Task::Classification);
        values.insert("koi_period".into(), "5000.01".into());
        values.insert("st_met".into(), "-3.76".into());
        let errors = validate(&values, set);

        let period = errors.get("koi_period").unwrap();
        assert_eq!(period.severity, Severity::Soft);
        assert_eq!(period.message, "Unusual value (typical range: 0.24–1000)");
        let met = errors.get("st_met").unwrap();
        assert_eq!(met.severity, Severity::Soft);
        assert!(!errors.has_hard_errors());
    }

    #[test]
    fn values_inside_soft_margin_do_not_warn() {
        let set = FeatureSet::for_task(Task::Classification);
        let mut values = filled(Task::Classification);
        values.insert("koi_period".into(), "4999".into());
        values.insert("st_met".into(), "-3.75".into());
        let errors = validate(&values, set);
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn extra_keys_outside_schema_are_ignored() {
        let mut values = filled(Task::Regression);
        values.insert("koi_ror".into(), "not a number".into());
        let errors = validate(&values, FeatureSet::for_task(Task::Regression));
        assert!(errors.is_empty());
    }

    #[test]
    fn remove_clears_single_field() {
        let errors_src = validate(&InputValues::new(), FeatureSet::for_task(Task::Regression));
        let mut errors = errors_src.clone();
        errors.remove("st_teff");
        assert_eq!(errors.len(), errors_src.len() - 1);
        assert_eq!(errors.hard_error_count(), errors.len());
    }
}
