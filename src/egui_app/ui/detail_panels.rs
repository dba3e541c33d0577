//! Sentiment breakdown and per-comment prediction sections.

use eframe::egui::{self, RichText, Ui};

use super::{bar_chart, style};
use crate::presenter::{
    BREAKDOWN_COLUMNS, BREAKDOWN_EMPTY_NOTICE, BreakdownSection, PREDICTION_COLUMNS,
    PREDICTIONS_EMPTY_NOTICE, PredictionRow, PredictionSection,
};

pub(super) fn render_breakdown(ui: &mut Ui, section: &BreakdownSection) {
    let palette = style::palette();
    ui.heading("Sentiment Summary");
    let (rows, chart) = match section {
        BreakdownSection::Empty => {
            notice(ui, BREAKDOWN_EMPTY_NOTICE);
            return;
        }
        BreakdownSection::Table { rows, chart } => (rows, chart),
    };
    egui::Grid::new("sentiment_breakdown")
        .striped(true)
        .num_columns(BREAKDOWN_COLUMNS.len())
        .show(ui, |ui| {
            for column in BREAKDOWN_COLUMNS {
                ui.label(RichText::new(column).color(palette.text_muted));
            }
            ui.end_row();
            for row in rows {
                ui.label(&row.label);
                ui.label(row.count.to_string());
                ui.label(&row.ratio_formatted);
                ui.end_row();
            }
        });
    ui.add_space(8.0);
    bar_chart::render_bar_chart(ui, chart);
}

pub(super) fn render_predictions(ui: &mut Ui, section: &PredictionSection) {
    let palette = style::palette();
    ui.heading("Comment Prediction Details");
    let (rows, raw_json) = match section {
        PredictionSection::Empty => {
            notice(ui, PREDICTIONS_EMPTY_NOTICE);
            return;
        }
        PredictionSection::Table { rows, raw_json } => (rows, raw_json),
    };
    egui::Grid::new("comment_predictions")
        .striped(true)
        .num_columns(PREDICTION_COLUMNS.len())
        .show(ui, |ui| {
            for column in PREDICTION_COLUMNS {
                ui.label(RichText::new(column).color(palette.text_muted));
            }
            ui.end_row();
            for row in rows {
                ui.label(&row.sentiment);
                ui.label(confidence_text(row));
                ui.add(egui::Label::new(row.comment.as_str()).wrap());
                ui.end_row();
            }
        });
    ui.add_space(6.0);
    egui::CollapsingHeader::new("View raw JSON")
        .id_salt("raw_predictions_json")
        .show(ui, |ui| {
            let mut text = raw_json.as_str();
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        });
}

fn confidence_text(row: &PredictionRow) -> String {
    row.confidence
        .map(|value| format!("{value:.4}"))
        .unwrap_or_else(|| "-".to_string())
}

fn notice(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(style::palette().text_muted));
}
