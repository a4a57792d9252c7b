//! Helpers to convert domain data into egui-facing view structs.

use crate::api::{HistoryEntry, Verdict};
use crate::egui_app::state::FormState;
use crate::interpret::{self, SizeBand};
use crate::schema::{FEATURE_GROUPS, FeatureSpec};
use crate::task::Task;
use crate::validation::FieldDiagnostic;
use time::macros::format_description;
use time::{PrimitiveDateTime, UtcOffset};

/// Empty-state text of the history panel.
pub const EMPTY_HISTORY_MESSAGE: &str = "No predictions yet. Submit a query to begin.";

/// One rendered input field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldView {
    pub key: &'static str,
    pub label: String,
    pub placeholder: String,
    pub tooltip: &'static str,
    pub value: String,
    pub diagnostic: Option<FieldDiagnostic>,
}

/// A titled block of fields.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldGroupView {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldView>,
}

/// Build the grouped field list for the active task. Groups without any
/// active feature are skipped.
pub fn form_groups(form: &FormState) -> Vec<FieldGroupView> {
    let set = form.feature_set();
    FEATURE_GROUPS
        .iter()
        .filter_map(|group| {
            let fields: Vec<FieldView> = group
                .features_in(set)
                .into_iter()
                .map(|spec| field_view(spec, form))
                .collect();
            (!fields.is_empty()).then_some(FieldGroupView {
                title: group.title,
                description: group.description,
                fields,
            })
        })
        .collect()
}

fn field_view(spec: &'static FeatureSpec, form: &FormState) -> FieldView {
    let label = if spec.unit.is_empty() {
        spec.label.to_string()
    } else {
        format!("{} ({})", spec.label, spec.unit)
    };
    FieldView {
        key: spec.key,
        label,
        placeholder: format!("e.g. {}", spec.median),
        tooltip: spec.tooltip,
        value: form.value(spec.key).to_string(),
        diagnostic: form.errors.get(spec.key).cloned(),
    }
}

/// One row of the history table.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryRowView {
    pub task: Task,
    pub badge: &'static str,
    pub time: String,
    pub summary: String,
    /// Set for classification rows so the summary can take the verdict color.
    pub verdict: Option<Verdict>,
    pub latency: Option<String>,
}

/// History rows with timestamps shown in the local time zone.
pub fn history_rows(entries: &[HistoryEntry]) -> Vec<HistoryRowView> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    entries
        .iter()
        .map(|entry| history_row(entry, offset))
        .collect()
}

/// History row with timestamps shifted to `offset`.
pub fn history_row(entry: &HistoryEntry, offset: UtcOffset) -> HistoryRowView {
    HistoryRowView {
        task: entry.task,
        badge: entry.task.badge(),
        time: format_timestamp_with_offset(&entry.timestamp, offset),
        summary: history_summary(entry),
        verdict: match entry.task {
            Task::Classification => entry.result.prediction,
            Task::Regression => None,
        },
        latency: entry.latency_ms.map(|ms| format!("{ms:.1} ms")),
    }
}

fn history_summary(entry: &HistoryEntry) -> String {
    let result = &entry.result;
    match entry.task {
        Task::Classification => {
            let verdict = result.prediction.map(Verdict::label).unwrap_or("Unknown");
            match result.confidence {
                Some(confidence) => {
                    format!("{verdict} · {} conf.", interpret::format_percent(confidence))
                }
                None => verdict.to_string(),
            }
        }
        Task::Regression => match result.prediction_earth_radii {
            Some(radius) => {
                let category = result
                    .size_category
                    .clone()
                    .unwrap_or_else(|| SizeBand::from_radius(radius).label().to_string());
                format!("{radius:.2} R⊕ · {category}")
            }
            None => "No radius".to_string(),
        },
    }
}

/// Render a naive-UTC ISO timestamp as `HH:MM:SS` in `offset`. Text that does
/// not parse is returned unchanged.
pub fn format_timestamp_with_offset(raw: &str, offset: UtcOffset) -> String {
    let trimmed = raw.trim().trim_end_matches('Z');
    let whole_seconds = trimmed.split('.').next().unwrap_or(trimmed);
    let parse_format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let Ok(naive) = PrimitiveDateTime::parse(whole_seconds, parse_format) else {
        return raw.to_string();
    };
    let local = naive.assume_utc().to_offset(offset);
    local
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HistoryResult;
    use crate::schema::SamplePreset;

    fn entry(task: Task, result: HistoryResult) -> HistoryEntry {
        HistoryEntry {
            id: Some(1),
            task,
            timestamp: "2024-05-01T12:34:56.789012".into(),
            result,
            latency_ms: Some(3.21),
        }
    }

    #[test]
    fn timestamp_is_shifted_to_offset() {
        let offset = UtcOffset::from_hms(2, 0, 0).unwrap();
        assert_eq!(
            format_timestamp_with_offset("2024-05-01T23:30:00.5", offset),
            "01:30:00"
        );
        assert_eq!(
            format_timestamp_with_offset("2024-05-01T08:00:00Z", UtcOffset::UTC),
            "08:00:00"
        );
    }

    #[test]
    fn unparseable_timestamp_is_kept_verbatim() {
        assert_eq!(
            format_timestamp_with_offset("yesterday", UtcOffset::UTC),
            "yesterday"
        );
    }

    #[test]
    fn classification_row_shows_verdict_and_confidence() {
        let row = history_row(
            &entry(
                Task::Classification,
                HistoryResult {
                    prediction: Some(Verdict::FalsePositive),
                    confidence: Some(0.87),
                    ..Default::default()
                },
            ),
            UtcOffset::UTC,
        );
        assert_eq!(row.badge, "CLASSIFY");
        assert_eq!(row.summary, "FALSE POSITIVE · 87.0% conf.");
        assert_eq!(row.verdict, Some(Verdict::FalsePositive));
        assert_eq!(row.latency.as_deref(), Some("3.2 ms"));
        assert_eq!(row.time, "12:34:56");
    }

    #[test]
    fn regression_row_falls_back_to_band_label() {
        let row = history_row(
            &entry(
                Task::Regression,
                HistoryResult {
                    prediction_earth_radii: Some(2.5),
                    ..Default::default()
                },
            ),
            UtcOffset::UTC,
        );
        assert_eq!(row.badge, "REGRESS");
        assert_eq!(row.summary, "2.50 R⊕ · Super-Earth");
        assert_eq!(row.verdict, None);
    }

    #[test]
    fn regression_form_skips_radius_ratio() {
        let mut form = FormState::default();
        form.task = Task::Regression;
        let groups = form_groups(&form);
        assert_eq!(groups.len(), 3);
        assert!(
            groups
                .iter()
                .flat_map(|group| &group.fields)
                .all(|field| field.key != "koi_ror")
        );
    }

    #[test]
    fn field_view_carries_value_unit_and_placeholder() {
        let mut form = FormState::default();
        form.fill(SamplePreset::Confirmed);
        let groups = form_groups(&form);
        let period = &groups[0].fields[0];
        assert_eq!(period.key, "koi_period");
        assert_eq!(period.label, "Orbital Period (days)");
        assert_eq!(period.placeholder, "e.g. 9.753");
        assert_eq!(period.value, "9.488");
        assert!(period.diagnostic.is_none());
    }
}
