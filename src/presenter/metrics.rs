use serde_json::{Map, Value};

use super::format;

/// Maximum number of metric cards per display row.
pub const METRIC_GROUP_SIZE: usize = 3;

/// Column headers of the evaluation metrics table.
pub const METRIC_COLUMNS: [&str; 3] = ["Metric", "Value", "Value (%)"];

/// One numeric evaluation metric.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricRow {
    /// Key as sent by the server; used for ordering.
    pub key: String,
    /// Title-cased display label.
    pub name: String,
    pub value: f64,
    /// Two-decimal percentage.
    pub formatted: String,
}

/// Numeric evaluation metrics ordered by key. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationTable {
    rows: Vec<MetricRow>,
}

impl EvaluationTable {
    /// All rows, sorted by metric key.
    pub fn rows(&self) -> &[MetricRow] {
        &self.rows
    }

    /// Rows split into display groups of at most [`METRIC_GROUP_SIZE`].
    pub fn groups(&self) -> std::slice::Chunks<'_, MetricRow> {
        self.rows.chunks(METRIC_GROUP_SIZE)
    }
}

/// Build the metrics table, or `None` when nothing numeric is left to show.
///
/// `metrics` wins when it is a non-empty object; otherwise a numeric top-level
/// `accuracy` stands in as a single entry.
pub(super) fn evaluation_table(payload: &Value, accuracy: Option<f64>) -> Option<EvaluationTable> {
    let source = match payload.get("metrics").and_then(Value::as_object) {
        Some(metrics) if !metrics.is_empty() => metrics.clone(),
        _ => {
            let mut synthesized = Map::new();
            if let Some(accuracy) = accuracy {
                synthesized.insert("accuracy".to_string(), Value::from(accuracy));
            }
            synthesized
        }
    };

    let mut rows: Vec<MetricRow> = source
        .iter()
        .filter_map(|(key, value)| {
            let value = format::as_number(Some(value))?;
            Some(MetricRow {
                key: key.clone(),
                name: format::display_label(key),
                value,
                formatted: format::percent_2dp(value),
            })
        })
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));

    if rows.is_empty() {
        None
    } else {
        Some(EvaluationTable { rows })
    }
}
