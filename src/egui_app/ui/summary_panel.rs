//! Success banner, headline metrics and evaluation metric cards.

use eframe::egui::{self, RichText, Ui};

use super::style;
use crate::presenter::{EvaluationTable, HeaderMetrics, METRIC_COLUMNS};

pub(super) fn render_header(ui: &mut Ui, header: &HeaderMetrics, from_cache: bool) {
    let palette = style::palette();
    let mut banner = header.success_banner();
    if from_cache {
        banner.push_str(" (cached)");
    }
    ui.label(RichText::new(banner).color(palette.success));
    ui.add_space(8.0);
    ui.columns(3, |cols| {
        metric_card(&mut cols[0], "Video ID", &header.video_id);
        metric_card(&mut cols[1], "Total Comments", &header.total_comments.to_string());
        metric_card(&mut cols[2], "Model Accuracy", &header.accuracy_label);
    });
}

pub(super) fn render_evaluation(ui: &mut Ui, table: &EvaluationTable) {
    let palette = style::palette();
    ui.heading("Model Evaluation Metrics");
    for group in table.groups() {
        ui.columns(group.len(), |cols| {
            for (col, row) in cols.iter_mut().zip(group) {
                metric_card(col, &row.name, &row.formatted);
            }
        });
        ui.add_space(4.0);
    }
    egui::Grid::new("evaluation_metrics")
        .striped(true)
        .num_columns(METRIC_COLUMNS.len())
        .show(ui, |ui| {
            for column in METRIC_COLUMNS {
                ui.label(RichText::new(column).color(palette.text_muted));
            }
            ui.end_row();
            for row in table.rows() {
                ui.label(&row.name);
                ui.label(row.value.to_string());
                ui.label(&row.formatted);
                ui.end_row();
            }
        });
}

fn metric_card(ui: &mut Ui, title: &str, value: &str) {
    let palette = style::palette();
    ui.vertical(|ui| {
        ui.label(RichText::new(title).color(palette.text_muted));
        ui.label(RichText::new(value).size(24.0).color(palette.text));
    });
}
