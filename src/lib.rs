//! Sentiment analysis dashboard: fetches `/analyze` results and renders them.

/// Client for the remote analysis endpoint.
pub mod analysis_api;
/// Application directory resolution.
pub mod app_dirs;
/// Persisted dashboard settings.
pub mod config;
/// egui controller and renderer.
pub mod egui_app;
/// Session cache for fetched payloads.
pub mod fetch_cache;
mod http_client;
/// Tracing setup.
pub mod logging;
/// Payload to view-model shaping.
pub mod presenter;
