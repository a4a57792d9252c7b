//! egui renderer for the application UI.

mod feature_form;
mod history_panel;
mod planet_view;
mod result_panel;
mod status_bar;
pub mod style;
mod top_bar;

use std::sync::Arc;
use std::time::Duration;

use crate::api::PredictionBackend;
use crate::egui_app::controller::EguiController;
use crate::egui_app::state::Tab;
use eframe::egui::{self, Frame, Margin};

/// Smallest window the layout still fits in.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app and start the background health probe.
    pub fn new(backend: Arc<dyn PredictionBackend>) -> Self {
        let mut controller = EguiController::new(backend);
        controller.check_health();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_center(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::same(12)),
            )
            .show(ctx, |ui| match self.controller.ui.tab {
                Tab::Predict => self.render_predict_view(ui),
                Tab::History => self.render_history_panel(ui),
            });
    }

    fn render_predict_view(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            egui::ScrollArea::vertical()
                .id_salt("feature_form_scroll")
                .auto_shrink([false, false])
                .show(&mut columns[0], |ui| self.render_feature_form(ui));
            egui::ScrollArea::vertical()
                .id_salt("result_scroll")
                .auto_shrink([false, false])
                .show(&mut columns[1], |ui| self.render_result_panel(ui));
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        if ctx.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command)
            && self.controller.ui.tab == Tab::Predict
        {
            self.controller.submit();
        }
        self.render_top_bar(ctx);
        self.render_status(ctx);
        self.render_center(ctx);
        if self.controller.has_pending_jobs() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
