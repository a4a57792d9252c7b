//! Client for a remote exoplanet prediction service.
//!
//! The crate validates KOI feature inputs, sends them to the classification or
//! regression endpoint, and turns the responses into renderable values. The
//! egui front end lives in [`egui_app`]; everything else is UI-agnostic.

/// Prediction service client and wire types.
pub mod api;
/// Application directory resolution.
pub mod app_dirs;
/// Environment-driven client configuration.
pub mod config;
/// egui front end.
pub mod egui_app;
/// Shared HTTP agent and bounded response reads.
mod http_client;
/// Derived display quantities (bars, planet sizes, importance ranking).
pub mod interpret;
/// Tracing setup with rotating log files.
pub mod logging;
/// Static feature schema and sample presets.
pub mod schema;
/// Prediction task modes.
pub mod task;
/// Per-field input validation.
pub mod validation;
