use eframe::egui::{self, Color32, Frame, Margin, RichText, Sense};

use super::EguiApp;
use super::style;
use crate::api::{
    ApiError, ClassificationResult, FeatureImportance, PredictionResult, RegressionResult,
};
use crate::egui_app::state::InferenceState;
use crate::interpret::{self, PlanetVisual, VerdictTone};

const BAR_HEIGHT: f32 = 10.0;

impl EguiApp {
    pub(super) fn render_result_panel(&mut self, ui: &mut egui::Ui) {
        match &self.controller.ui.inference {
            InferenceState::Idle => render_empty(ui),
            InferenceState::Loading { task, .. } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(format!("Running {} model…", task.label().to_lowercase()));
                });
            }
            InferenceState::Failed(err) => render_error(ui, err),
            InferenceState::Ready(PredictionResult::Classification(result)) => {
                render_classification(ui, result)
            }
            InferenceState::Ready(PredictionResult::Regression(result)) => {
                render_regression(ui, result)
            }
        }
    }
}

fn card(
    ui: &mut egui::Ui,
    stroke_color: Option<Color32>,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let palette = style::palette();
    let stroke = match stroke_color {
        Some(color) => egui::Stroke::new(1.5, color),
        None => style::section_stroke(),
    };
    Frame::new()
        .fill(palette.bg_secondary)
        .stroke(stroke)
        .corner_radius(6)
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

fn render_empty(ui: &mut egui::Ui) {
    let palette = style::palette();
    card(ui, None, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("No prediction yet").strong());
            ui.label(
                RichText::new("Fill in the parameters or load an example, then run the model.")
                    .color(palette.text_muted),
            );
            ui.add_space(24.0);
        });
    });
}

fn render_error(ui: &mut egui::Ui, err: &ApiError) {
    let palette = style::palette();
    card(ui, Some(palette.error), |ui| {
        ui.label(RichText::new("Prediction failed").strong().color(palette.error));
        ui.label(err.to_string());
        if matches!(err, ApiError::NetworkUnreachable { .. }) {
            ui.add_space(4.0);
            ui.label(
                RichText::new("Start the prediction service and try again.")
                    .small()
                    .color(palette.text_muted),
            );
        }
    });
}

fn render_classification(ui: &mut egui::Ui, result: &ClassificationResult) {
    let palette = style::palette();
    let tone = VerdictTone::from(result.prediction);
    let verdict_color = style::verdict_color(tone);
    card(ui, Some(verdict_color), |ui| {
        ui.label(RichText::new("Verdict").small().color(palette.text_muted));
        ui.label(
            RichText::new(result.prediction.label())
                .size(24.0)
                .strong()
                .color(verdict_color),
        );
        ui.label(format!(
            "Confidence {}",
            interpret::format_percent(result.confidence)
        ));
        ui.add_space(8.0);
        for bar in interpret::probability_bars(result) {
            ui.horizontal(|ui| {
                ui.label(RichText::new(bar.label).small().monospace());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(&bar.percent_text).small());
                });
            });
            fraction_bar(ui, bar.fraction, style::verdict_color(bar.tone));
        }
        if let Some(metrics) = result.model_metrics {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "Model F1 {:.3} · ROC-AUC {:.3}",
                    metrics.f1, metrics.roc_auc
                ))
                .small()
                .color(palette.text_muted),
            );
        }
        render_latency(ui, result.latency_ms);
    });
    if let Some(importance) = &result.feature_importance {
        ui.add_space(8.0);
        render_importance(ui, importance);
    }
}

fn render_regression(ui: &mut egui::Ui, result: &RegressionResult) {
    let palette = style::palette();
    let visual = PlanetVisual::from_radius(result.prediction_earth_radii);
    let category = result
        .size_category
        .clone()
        .unwrap_or_else(|| visual.band.label().to_string());
    card(ui, None, |ui| {
        ui.label(RichText::new("Predicted radius").small().color(palette.text_muted));
        ui.label(RichText::new(visual.radius_text()).size(24.0).strong());
        ui.label(RichText::new(category).color(style::planet_colors(visual.band).1));
        if let Some([low, high]) = result.confidence_interval {
            ui.label(
                RichText::new(format!("Interval {low:.2} – {high:.2} R⊕"))
                    .small()
                    .color(palette.text_muted),
            );
        }
        ui.add_space(8.0);
        super::planet_view::planet_comparison(ui, &visual);
        if let Some(metrics) = result.model_metrics {
            ui.label(
                RichText::new(format!(
                    "Model RMSE {:.3} · MAE {:.3} R⊕",
                    metrics.rmse, metrics.mae
                ))
                .small()
                .color(palette.text_muted),
            );
        }
        render_latency(ui, result.latency_ms);
    });
    if let Some(importance) = &result.feature_importance {
        ui.add_space(8.0);
        render_importance(ui, importance);
    }
}

fn render_latency(ui: &mut egui::Ui, latency_ms: Option<f64>) {
    if let Some(latency) = latency_ms {
        ui.label(
            RichText::new(format!("{latency:.1} ms"))
                .small()
                .monospace()
                .color(style::palette().text_muted),
        );
    }
}

fn render_importance(ui: &mut egui::Ui, importance: &FeatureImportance) {
    let bars = interpret::importance_bars(importance);
    if bars.is_empty() {
        return;
    }
    let palette = style::palette();
    card(ui, None, |ui| {
        ui.label(RichText::new("Feature importance").strong());
        ui.add_space(4.0);
        for bar in bars {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&bar.key).small().monospace());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("{:.3}", bar.weight)).small());
                });
            });
            fraction_bar(ui, bar.fraction, palette.accent);
        }
    });
}

fn fraction_bar(ui: &mut egui::Ui, fraction: f32, color: Color32) {
    let palette = style::palette();
    let width = ui.available_width();
    let (track, _) = ui.allocate_exact_size(egui::vec2(width, BAR_HEIGHT), Sense::hover());
    ui.painter().rect_filled(track, 3.0, palette.bg_tertiary);
    let mut fill = track;
    fill.set_width(track.width() * fraction.clamp(0.0, 1.0));
    ui.painter().rect_filled(fill, 3.0, color);
}
