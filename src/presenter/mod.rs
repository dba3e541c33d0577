//! Shapes a raw `/analyze` payload into render-ready view models.
//!
//! The payload is untrusted: every field is optional and may carry the wrong
//! type. Each section degrades on its own to a fallback value, a notice, or
//! omission, so [`present`] never fails.

mod breakdown;
pub mod format;
mod header;
mod metrics;
mod predictions;

use serde_json::Value;

pub use breakdown::{
    BREAKDOWN_COLUMNS, BREAKDOWN_EMPTY_NOTICE, BreakdownRow, BreakdownSection, ChartSeries,
};
pub use header::{HeaderMetrics, VIDEO_ID_UNAVAILABLE};
pub use metrics::{EvaluationTable, METRIC_COLUMNS, METRIC_GROUP_SIZE, MetricRow};
pub use predictions::{
    PREDICTION_COLUMNS, PREDICTIONS_EMPTY_NOTICE, PredictionRow, PredictionSection,
};

/// Everything the dashboard renders for one payload.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub header: HeaderMetrics,
    /// `None` when no numeric metric survives filtering.
    pub evaluation: Option<EvaluationTable>,
    pub breakdown: BreakdownSection,
    pub predictions: PredictionSection,
}

/// Build the view model for `payload`, keeping at most `preview_rows` predictions.
pub fn present(payload: &Value, preview_rows: usize) -> ViewModel {
    let header = header::header_metrics(payload);
    let evaluation = metrics::evaluation_table(payload, header.accuracy);
    ViewModel {
        evaluation,
        breakdown: breakdown::breakdown_section(payload),
        predictions: predictions::prediction_section(payload, preview_rows),
        header,
    }
}
