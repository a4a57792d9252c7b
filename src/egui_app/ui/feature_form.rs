use eframe::egui::{self, Frame, Margin, RichText};

use super::EguiApp;
use super::style;
use crate::egui_app::view_model::{self, FieldView};
use crate::schema::SamplePreset;
use crate::task::Task;
use crate::validation::Severity;

const FIELD_WIDTH: f32 = 140.0;

impl EguiApp {
    pub(super) fn render_feature_form(&mut self, ui: &mut egui::Ui) {
        self.render_task_selector(ui);
        ui.add_space(8.0);
        self.render_form_actions(ui);
        ui.add_space(8.0);
        let groups = view_model::form_groups(&self.controller.ui.form);
        for group in groups {
            self.render_field_group(ui, group.title, group.description, &group.fields);
            ui.add_space(8.0);
        }
        self.render_submit(ui);
    }

    fn render_task_selector(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let active = self.controller.ui.form.task;
        ui.horizontal(|ui| {
            for task in Task::ALL {
                let response = ui.selectable_label(
                    active == task,
                    RichText::new(task.label()).strong(),
                );
                if response.on_hover_text(task.subtitle()).clicked() {
                    self.controller.set_task(task);
                }
            }
        });
        ui.label(RichText::new(active.subtitle()).color(palette.text_muted));
    }

    fn render_form_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for preset in [SamplePreset::Confirmed, SamplePreset::FalsePositive] {
                if ui.button(preset.label()).clicked() {
                    self.controller.fill_sample(preset);
                }
            }
            if ui.button("Clear").clicked() {
                self.controller.clear_form();
            }
        });
    }

    fn render_field_group(
        &mut self,
        ui: &mut egui::Ui,
        title: &str,
        description: &str,
        fields: &[FieldView],
    ) {
        let palette = style::palette();
        Frame::new()
            .fill(palette.bg_secondary)
            .stroke(style::section_stroke())
            .corner_radius(6)
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(title).strong());
                ui.label(RichText::new(description).small().color(palette.text_muted));
                ui.add_space(6.0);
                egui::Grid::new(("feature_group", title))
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        for field in fields {
                            self.render_field(ui, field);
                            ui.end_row();
                        }
                    });
            });
    }

    fn render_field(&mut self, ui: &mut egui::Ui, field: &FieldView) {
        let palette = style::palette();
        ui.label(&field.label).on_hover_text(field.tooltip);
        ui.vertical(|ui| {
            let mut buffer = field.value.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut buffer)
                    .hint_text(&field.placeholder)
                    .desired_width(FIELD_WIDTH),
            );
            if response.on_hover_text(field.tooltip).changed() {
                self.controller.set_field(field.key, buffer);
            }
            if let Some(diagnostic) = &field.diagnostic {
                let color = match diagnostic.severity {
                    Severity::Hard => palette.error,
                    Severity::Soft => palette.warning,
                };
                ui.label(RichText::new(&diagnostic.message).small().color(color));
            }
        });
    }

    fn render_submit(&mut self, ui: &mut egui::Ui) {
        let loading = self.controller.ui.inference.is_loading();
        let label = if loading {
            "Running…".to_string()
        } else {
            format!("Run {}", self.controller.ui.form.task.label())
        };
        ui.horizontal(|ui| {
            let button = egui::Button::new(RichText::new(label).strong())
                .min_size(egui::vec2(160.0, 28.0));
            if ui.add_enabled(!loading, button).clicked() {
                self.controller.submit();
            }
            if loading {
                ui.spinner();
            }
        });
    }
}
