#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the sentiment dashboard.
use eframe::egui;
use sentidash::config::{self, DashboardSettings};
use sentidash::egui_app::controller::DashboardController;
use sentidash::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use sentidash::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = load_settings();
    let mut controller = DashboardController::from_settings(settings);
    match config::config_path() {
        Ok(path) => controller = controller.with_settings_path(path),
        Err(err) => tracing::warn!("Settings will not be saved: {err}"),
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size(MIN_VIEWPORT_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Sentiment Dashboard",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(controller)))),
    )?;
    Ok(())
}

/// Load persisted settings, falling back to defaults when the file is unusable.
fn load_settings() -> DashboardSettings {
    match config::load_or_default() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("Using default settings: {err}");
            DashboardSettings::default()
        }
    }
}
