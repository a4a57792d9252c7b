use eframe::egui::{self, Frame, Margin, RichText, Sense};

use super::EguiApp;
use super::style;
use crate::egui_app::state::Tab;

impl EguiApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("ExoScope").strong().size(18.0));
                    ui.label(
                        RichText::new("Exoplanet classification & radius estimation")
                            .color(palette.text_muted),
                    );
                    ui.add_space(16.0);
                    for tab in [Tab::Predict, Tab::History] {
                        let selected = self.controller.ui.tab == tab;
                        if ui.selectable_label(selected, tab.label()).clicked() {
                            self.controller.select_tab(tab);
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let backend = self.controller.ui.backend;
                        ui.label(RichText::new(backend.label()).color(palette.text_muted))
                            .on_hover_text(self.controller.base_url());
                        let (dot, _) =
                            ui.allocate_exact_size(egui::vec2(10.0, 10.0), Sense::hover());
                        ui.painter()
                            .circle_filled(dot.center(), 4.0, style::backend_dot_color(backend));
                    });
                });
            });
    }
}
