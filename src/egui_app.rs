//! egui front end for the sentiment dashboard.

/// Fetch orchestration and dashboard state ownership.
pub mod controller;
/// UI state shared between controller and renderer.
pub mod state;
/// egui renderer.
pub mod ui;
