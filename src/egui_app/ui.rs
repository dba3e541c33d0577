//! egui renderer for the dashboard.

mod bar_chart;
mod detail_panels;
pub mod style;
mod summary_panel;

use std::time::Duration;

use crate::config::{MAX_PREVIEW_ROWS, MIN_PREVIEW_ROWS, PREVIEW_ROWS_STEP};
use crate::egui_app::controller::DashboardController;
use eframe::egui::{self, RichText};

/// Smallest window size that keeps the tables readable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 480.0);

const FOOTER_CAPTION: &str = "Make sure the analysis server is running and has the latest \
    comments_*.csv file in its data/raw/ folder.";
const FETCH_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the dashboard using the shared controller state.
pub struct EguiApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: DashboardController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(RichText::new(FOOTER_CAPTION).small().color(style::palette().text_muted));
            ui.add_space(4.0);
        });
    }

    fn render_intro(&self, ui: &mut egui::Ui) {
        ui.heading("Sentiment Dashboard: YouTube Comments");
        ui.label(
            "Calls the analysis server's /analyze endpoint to fetch the latest inference \
             results for the newest comments file.",
        );
        ui.add_space(8.0);
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("dashboard_controls")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Base URL");
                ui.add(
                    egui::TextEdit::singleline(&mut self.controller.ui.base_url_input)
                        .desired_width(360.0),
                );
                ui.end_row();

                ui.label("Comments shown");
                let mut rows = self.controller.ui.preview_rows;
                let slider = ui.add(
                    egui::Slider::new(&mut rows, MIN_PREVIEW_ROWS..=MAX_PREVIEW_ROWS)
                        .step_by(f64::from(PREVIEW_ROWS_STEP)),
                );
                if slider.changed() {
                    self.controller.set_preview_rows(rows);
                }
                ui.end_row();
            });
        ui.separator();

        let fetching = self.controller.ui.fetching;
        ui.horizontal(|ui| {
            let fetch = ui.add_enabled(
                !fetching,
                egui::Button::new("Fetch & show inference results"),
            );
            if fetch.clicked() {
                self.controller.request_fetch();
            }
            if ui.button("Clear cache").clicked() {
                self.controller.clear_cache();
            }
            if fetching {
                ui.spinner();
                ui.label("Calling /analyze ...");
            }
        });

        let palette = style::palette();
        if let Some(error) = &self.controller.ui.error {
            ui.label(RichText::new(error).color(palette.error));
        }
        if let Some(notice) = &self.controller.ui.notice {
            ui.label(RichText::new(notice).color(palette.text_muted));
        }
    }

    fn render_results(&self, ui: &mut egui::Ui) {
        let Some(view) = &self.controller.ui.view else {
            return;
        };
        ui.add_space(8.0);
        summary_panel::render_header(ui, &view.header, self.controller.ui.loaded_from_cache);
        if let Some(table) = &view.evaluation {
            ui.add_space(12.0);
            summary_panel::render_evaluation(ui, table);
        }
        ui.add_space(12.0);
        detail_panels::render_breakdown(ui, &view.breakdown);
        ui.add_space(12.0);
        detail_panels::render_predictions(ui, &view.predictions);
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_jobs();
        if self.controller.ui.fetching {
            ctx.request_repaint_after(FETCH_POLL_INTERVAL);
        }

        self.render_footer(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_intro(ui);
                    self.render_controls(ui);
                    self.render_results(ui);
                });
        });
    }
}
