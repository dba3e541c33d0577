//! Dashboard controller: owns settings, the fetch cache and the UI state.

mod jobs;

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use crate::analysis_api::{self, FetchError};
use crate::config::{self, DashboardSettings};
use crate::egui_app::state::DashboardState;
use crate::fetch_cache::{self, FetchCache};
use crate::presenter;

use jobs::{FetchJob, FetchJobs, FetchResult};

/// Maintains dashboard state and drives fetches for the egui renderer.
pub struct DashboardController {
    pub ui: DashboardState,
    settings: DashboardSettings,
    cache: Box<dyn FetchCache>,
    jobs: FetchJobs,
    last_payload: Option<Arc<Value>>,
    settings_path: Option<PathBuf>,
}

impl DashboardController {
    pub fn new(settings: DashboardSettings, cache: Box<dyn FetchCache>) -> Self {
        let settings = settings.normalized();
        Self {
            ui: DashboardState::from_settings(&settings),
            settings,
            cache,
            jobs: FetchJobs::new(),
            last_payload: None,
            settings_path: None,
        }
    }

    /// Build a controller whose cache strategy follows `settings.cache_enabled`.
    pub fn from_settings(settings: DashboardSettings) -> Self {
        let cache = fetch_cache::cache_for(settings.cache_enabled);
        Self::new(settings, cache)
    }

    /// Persist settings to `path` whenever the user changes them.
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn is_fetching(&self) -> bool {
        self.jobs.in_progress()
    }

    /// Validate the base URL, then serve from cache or start a background fetch.
    pub fn request_fetch(&mut self) {
        if self.jobs.in_progress() {
            return;
        }
        self.ui.notice = None;
        let base_url = match analysis_api::normalize_base_url(&self.ui.base_url_input) {
            Ok(base_url) => base_url,
            Err(err) => {
                self.show_error(&err);
                return;
            }
        };
        if self.settings.base_url != base_url {
            self.settings.base_url = base_url.clone();
            self.persist_settings();
        }

        if let Some(payload) = self.cache.get(&base_url) {
            tracing::debug!("Serving analysis for {base_url} from cache");
            self.show_payload(payload, true);
            return;
        }

        self.ui.error = None;
        self.ui.fetching = self.jobs.begin_fetch(FetchJob {
            base_url,
            timeout: self.settings.request_timeout(),
        });
    }

    /// Apply finished fetches. Call once per frame.
    pub fn poll_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv() {
            self.handle_fetch_result(message);
        }
        self.ui.fetching = self.jobs.in_progress();
    }

    /// Change the preview row count and re-present the last payload.
    pub fn set_preview_rows(&mut self, rows: u32) {
        let rows = config::clamp_preview_rows(rows);
        self.ui.preview_rows = rows;
        if self.settings.preview_rows == rows {
            return;
        }
        self.settings.preview_rows = rows;
        self.persist_settings();
        if let Some(payload) = self.last_payload.clone() {
            self.ui.view = Some(presenter::present(&payload, rows as usize));
        }
    }

    /// Drop every cached payload so the next fetch hits the server.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.ui.loaded_from_cache = false;
        self.ui.notice = Some("Cache cleared; the next fetch calls the server.".to_string());
        tracing::info!("Analysis cache cleared");
    }

    fn handle_fetch_result(&mut self, message: FetchResult) {
        match message.result {
            Ok(payload) => {
                let payload = Arc::new(payload);
                self.cache.insert(&message.base_url, payload.clone());
                tracing::info!("Loaded analysis from {}", message.base_url);
                self.show_payload(payload, false);
            }
            Err(err) => {
                tracing::warn!("Analysis fetch from {} failed: {err}", message.base_url);
                self.show_error(&err);
            }
        }
    }

    fn show_payload(&mut self, payload: Arc<Value>, from_cache: bool) {
        self.ui.view = Some(presenter::present(&payload, self.ui.preview_rows as usize));
        self.ui.error = None;
        self.ui.loaded_from_cache = from_cache;
        self.last_payload = Some(payload);
    }

    fn show_error(&mut self, err: &FetchError) {
        self.ui.error = Some(err.user_message());
        self.ui.view = None;
        self.ui.loaded_from_cache = false;
        self.last_payload = None;
    }

    fn persist_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(err) = config::save_to_path(&self.settings, path) {
            tracing::warn!("Failed to save settings: {err}");
        }
    }
}
