//! egui front end: UI state, controller and renderer.

/// Controller dispatching background calls and applying their results.
pub mod controller;
/// UI state and its transitions.
pub mod state;
/// egui renderer.
pub mod ui;
/// Conversion of state into view structs.
pub mod view_model;
