//! Painted bar chart for the sentiment breakdown.

use eframe::egui::{Align2, FontId, Rect, Sense, Ui, pos2, vec2};

use super::style;
use crate::presenter::ChartSeries;

const CHART_HEIGHT: f32 = 180.0;
const LABEL_BAND: f32 = 20.0;
const VALUE_BAND: f32 = 16.0;
const BAR_FILL_RATIO: f32 = 0.6;

pub(super) fn render_bar_chart(ui: &mut Ui, series: &ChartSeries) {
    if series.bars.is_empty() {
        return;
    }
    let palette = style::palette();
    let width = ui.available_width().max(120.0);
    let (response, painter) = ui.allocate_painter(
        vec2(width, CHART_HEIGHT + LABEL_BAND + VALUE_BAND),
        Sense::hover(),
    );
    let outer = response.rect;
    let plot = Rect::from_min_max(
        pos2(outer.left(), outer.top() + VALUE_BAND),
        pos2(outer.right(), outer.bottom() - LABEL_BAND),
    );

    let bars = bar_rects(series, plot);
    for (rect, (label, count)) in bars.iter().zip(&series.bars) {
        painter.rect_filled(*rect, 0.0, style::chart_bar_fill());
        painter.text(
            pos2(rect.center().x, rect.top() - 2.0),
            Align2::CENTER_BOTTOM,
            count.to_string(),
            FontId::proportional(11.0),
            palette.text,
        );
        painter.text(
            pos2(rect.center().x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(12.0),
            palette.text_muted,
        );
    }
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], style::chart_axis());
    if let Some(pos) = response.hover_pos()
        && let Some(index) = bars.iter().position(|rect| rect.x_range().contains(pos.x))
    {
        let (label, count) = &series.bars[index];
        response.on_hover_text(format!("{label}: {count}"));
    }
}

/// Lay out one bar per series entry inside `plot`, scaled to the largest count.
///
/// Negative counts draw as empty bars.
fn bar_rects(series: &ChartSeries, plot: Rect) -> Vec<Rect> {
    let slots = series.bars.len().max(1) as f32;
    let slot_width = plot.width() / slots;
    let bar_width = slot_width * BAR_FILL_RATIO;
    let max = series.max().max(1) as f32;
    series
        .bars
        .iter()
        .enumerate()
        .map(|(index, (_, count))| {
            let left = plot.left() + slot_width * index as f32 + (slot_width - bar_width) / 2.0;
            let height = plot.height() * (*count).max(0) as f32 / max;
            Rect::from_min_max(
                pos2(left, plot.bottom() - height),
                pos2(left + bar_width, plot.bottom()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(counts: &[i64]) -> ChartSeries {
        ChartSeries {
            bars: counts
                .iter()
                .enumerate()
                .map(|(idx, count)| (format!("label{idx}"), *count))
                .collect(),
        }
    }

    #[test]
    fn tallest_bar_fills_plot_height() {
        let plot = Rect::from_min_max(pos2(0.0, 0.0), pos2(300.0, 100.0));
        let rects = bar_rects(&series(&[7, 3, 0]), plot);
        assert_eq!(rects.len(), 3);
        assert!((rects[0].height() - 100.0).abs() < 1e-3);
        assert!((rects[1].height() - 100.0 * 3.0 / 7.0).abs() < 1e-3);
        assert_eq!(rects[2].height(), 0.0);
        assert!(rects.iter().all(|rect| rect.bottom() == 100.0));
    }

    #[test]
    fn bars_stay_inside_their_slots_in_order() {
        let plot = Rect::from_min_max(pos2(10.0, 0.0), pos2(210.0, 50.0));
        let rects = bar_rects(&series(&[1, 1]), plot);
        assert!(rects[0].right() <= 110.0);
        assert!(rects[1].left() >= 110.0);
        assert!(rects[1].right() <= 210.0);
    }

    #[test]
    fn all_zero_counts_draw_flat_bars() {
        let plot = Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0));
        let rects = bar_rects(&series(&[0, 0]), plot);
        assert!(rects.iter().all(|rect| rect.height() == 0.0));
    }
}
