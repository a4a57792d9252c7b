use eframe::egui::{self, Color32, RichText, Sense, Shape, Stroke};

use super::style;
use crate::interpret::{self, MAX_PX, PlanetVisual};

const LABEL_HEIGHT: f32 = 16.0;

/// Draw the predicted planet next to the solar-system planets it compares to.
pub(super) fn planet_comparison(ui: &mut egui::Ui, visual: &PlanetVisual) {
    let palette = style::palette();
    let references = interpret::reference_planets(visual.radius);
    ui.horizontal_top(|ui| {
        let slot = MAX_PX * 1.6;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(slot, slot), Sense::hover());
        let center = rect.center();
        let radius = visual.size_px / 2.0;
        let (body, highlight) = style::planet_colors(visual.band);
        let painter = ui.painter_at(rect);
        painter.circle_filled(center, radius + 6.0, body.gamma_multiply(0.15));
        painter.circle_filled(center, radius, body);
        painter.circle_filled(
            center - egui::vec2(radius * 0.3, radius * 0.3),
            radius * 0.35,
            highlight.gamma_multiply(0.5),
        );
        if visual.has_ring {
            painter.add(Shape::ellipse_stroke(
                center,
                egui::vec2(radius * 1.5, radius * 0.35),
                Stroke::new(2.0, highlight.gamma_multiply(0.8)),
            ));
        }

        ui.add_space(12.0);
        for planet in references {
            ui.vertical(|ui| {
                let size = planet.size_px();
                let desired = egui::vec2(size.max(24.0), slot - LABEL_HEIGHT);
                let (rect, _) = ui.allocate_exact_size(desired, Sense::hover());
                let [r, g, b] = planet.rgb;
                ui.painter()
                    .circle_filled(rect.center(), size / 2.0, Color32::from_rgb(r, g, b));
                ui.label(
                    RichText::new(planet.name)
                        .small()
                        .color(palette.text_muted),
                );
            });
        }
    });
}
