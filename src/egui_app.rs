//! Immediate-mode UI: shared state, controller, view models, and renderer.

/// Bridges UI interactions to the artifact store and inference adapter.
pub mod controller;
/// Shared state types for the egui UI.
pub mod state;
/// egui renderer for the application UI.
pub mod ui;
/// Converts predictions into display-ready strings and rows.
pub mod view_model;
