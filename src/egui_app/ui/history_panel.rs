use eframe::egui::{self, Frame, Margin, RichText};

use super::EguiApp;
use super::style;
use crate::egui_app::view_model::{self, EMPTY_HISTORY_MESSAGE};
use crate::interpret::VerdictTone;

impl EguiApp {
    pub(super) fn render_history_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Prediction history").strong().size(16.0));
            let loading = self.controller.ui.history.is_loading();
            if ui.add_enabled(!loading, egui::Button::new("Refresh")).clicked() {
                self.controller.refresh_history();
            }
            if loading {
                ui.spinner();
            }
        });
        ui.add_space(8.0);

        let history = &self.controller.ui.history;
        if history.is_empty() {
            if history.loaded {
                ui.label(RichText::new(EMPTY_HISTORY_MESSAGE).color(palette.text_muted));
            }
            return;
        }
        let rows = view_model::history_rows(&history.entries);
        Frame::new()
            .fill(palette.bg_secondary)
            .stroke(style::section_stroke())
            .corner_radius(6)
            .inner_margin(Margin::same(8))
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        egui::Grid::new("history_rows")
                            .num_columns(4)
                            .striped(true)
                            .spacing([16.0, 6.0])
                            .show(ui, |ui| {
                                for row in &rows {
                                    ui.label(
                                        RichText::new(row.badge).small().monospace().strong(),
                                    );
                                    ui.label(RichText::new(&row.time).monospace());
                                    let summary = RichText::new(&row.summary);
                                    let summary = match row.verdict {
                                        Some(verdict) => {
                                            let tone = VerdictTone::from(verdict);
                                            summary.color(style::verdict_color(tone))
                                        }
                                        None => summary,
                                    };
                                    ui.label(summary);
                                    ui.label(
                                        RichText::new(row.latency.as_deref().unwrap_or("–"))
                                            .small()
                                            .color(palette.text_muted),
                                    );
                                    ui.end_row();
                                }
                            });
                    });
            });
    }
}
