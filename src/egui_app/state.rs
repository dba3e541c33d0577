//! UI state consumed by the egui renderer.

use crate::config::DashboardSettings;
use crate::presenter::ViewModel;

/// Top-level UI model. The controller owns it; the renderer reads and edits inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    /// Raw text of the base URL field, normalized only when fetching.
    pub base_url_input: String,
    pub preview_rows: u32,
    /// A fetch is running in the background.
    pub fetching: bool,
    /// Inline error from the last fetch attempt.
    pub error: Option<String>,
    pub view: Option<ViewModel>,
    /// The shown results came from the session cache rather than a new request.
    pub loaded_from_cache: bool,
    /// Transient note for actions like clearing the cache.
    pub notice: Option<String>,
}

impl DashboardState {
    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self {
            base_url_input: settings.base_url.clone(),
            preview_rows: settings.preview_rows,
            fetching: false,
            error: None,
            view: None,
            loaded_from_cache: false,
            notice: None,
        }
    }
}
