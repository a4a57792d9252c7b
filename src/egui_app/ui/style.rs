use crate::egui_app::state::{BackendStatus, StatusTone};
use crate::interpret::{SizeBand, VerdictTone};
use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub confirmed: Color32,
    pub false_positive: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(8, 10, 18),
        bg_secondary: Color32::from_rgb(16, 20, 32),
        bg_tertiary: Color32::from_rgb(30, 36, 54),
        panel_outline: Color32::from_rgb(44, 52, 74),
        grid_soft: Color32::from_rgb(24, 28, 42),
        text_primary: Color32::from_rgb(220, 226, 240),
        text_muted: Color32::from_rgb(130, 140, 165),
        accent: Color32::from_rgb(99, 102, 241),
        warning: Color32::from_rgb(245, 158, 11),
        error: Color32::from_rgb(239, 68, 68),
        confirmed: Color32::from_rgb(16, 185, 129),
        false_positive: Color32::from_rgb(239, 68, 68),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.error;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.5);
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_widget(&mut visuals.widgets.inactive, palette);
    set_widget(&mut visuals.widgets.hovered, palette);
    set_widget(&mut visuals.widgets.active, palette);
    set_widget(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(6);
    visuals.popup_shadow = Shadow::NONE;
}

fn set_widget(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.grid_soft;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn section_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

pub fn inner_border() -> Stroke {
    Stroke::new(1.0, palette().grid_soft)
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(42, 42, 42),
        StatusTone::Busy => Color32::from_rgb(31, 139, 255),
        StatusTone::Info => Color32::from_rgb(64, 140, 112),
        StatusTone::Warning => Color32::from_rgb(192, 138, 43),
        StatusTone::Error => Color32::from_rgb(192, 57, 43),
    }
}

pub fn backend_dot_color(status: BackendStatus) -> Color32 {
    let palette = palette();
    match status {
        BackendStatus::Unknown => palette.text_muted,
        BackendStatus::Online => palette.confirmed,
        BackendStatus::Offline => palette.error,
    }
}

pub fn verdict_color(tone: VerdictTone) -> Color32 {
    let palette = palette();
    match tone {
        VerdictTone::Confirmed => palette.confirmed,
        VerdictTone::FalsePositive => palette.false_positive,
    }
}

/// Body and highlight colors of a planet in `band`.
pub fn planet_colors(band: SizeBand) -> (Color32, Color32) {
    let hue = band.hue();
    (hsl(hue, 0.70, 0.45), hsl(hue, 0.80, 0.70))
}

/// Convert HSL (hue in degrees, saturation and lightness in `0..=1`).
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hue = hue.rem_euclid(360.0) / 60.0;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (hue % 2.0 - 1.0).abs());
    let (r, g, b) = match hue as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |value: f32| ((value + m).clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(r), channel(g), channel(b))
}
