#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based ExoScope client.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use eframe::egui;
use exoscope::api::HttpBackend;
use exoscope::config::ApiConfig;
use exoscope::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use exoscope::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match logging::init() {
        Ok(path) => tracing::info!(log_file = %path.display(), "logging initialised"),
        Err(err) => eprintln!("Logging disabled: {err}"),
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("ExoScope")
        .with_inner_size(egui::vec2(1280.0, 820.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let config = ApiConfig::from_env();
    if let Ok(config) = &config {
        tracing::info!(base_url = config.base_url(), "using prediction service");
    }
    eframe::run_native(
        "ExoScope",
        native_options,
        Box::new(move |_cc| match config {
            Ok(config) => Ok(Box::new(EguiApp::new(Arc::new(HttpBackend::new(config))))),
            Err(err) => {
                tracing::error!(error = %err, "invalid configuration");
                Ok(Box::new(LaunchError {
                    message: err.to_string(),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start ExoScope");
                ui.label(&self.message);
            });
        });
    }
}
