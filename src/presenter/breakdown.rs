use serde_json::Value;

use super::format::{self, NOT_AVAILABLE};

/// Column headers of the sentiment breakdown table.
pub const BREAKDOWN_COLUMNS: [&str; 3] = ["Label", "Count", "Ratio"];

/// Notice shown instead of an empty breakdown table.
pub const BREAKDOWN_EMPTY_NOTICE: &str = "No sentiment summary to show.";

/// One row of the sentiment breakdown table.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownRow {
    pub label: String,
    pub count: i64,
    /// One-decimal percentage or `n/a`.
    pub ratio_formatted: String,
}

/// Label → count pairs for the bar chart, in table order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSeries {
    pub bars: Vec<(String, i64)>,
}

impl ChartSeries {
    /// Sum of all bar counts, saturating at `i64::MAX`.
    pub fn total(&self) -> i64 {
        self.bars
            .iter()
            .fold(0i64, |acc, (_, count)| acc.saturating_add(*count))
    }

    /// Largest bar, used to scale the chart. Zero when every bar is empty.
    pub fn max(&self) -> i64 {
        self.bars.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BreakdownSection {
    Empty,
    Table {
        rows: Vec<BreakdownRow>,
        chart: ChartSeries,
    },
}

/// Duplicate labels are kept as separate rows in input order.
pub(super) fn breakdown_section(payload: &Value) -> BreakdownSection {
    let Some(entries) = payload.get("breakdown").and_then(Value::as_array) else {
        return BreakdownSection::Empty;
    };
    let rows: Vec<BreakdownRow> = entries
        .iter()
        .filter(|entry| entry.is_object())
        .map(|entry| BreakdownRow {
            label: format::label_text(entry.get("label_text"))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            count: format::as_integer(entry.get("count")).unwrap_or(0),
            ratio_formatted: format::as_number(entry.get("ratio"))
                .map(format::percent_1dp)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        })
        .collect();
    if rows.is_empty() {
        return BreakdownSection::Empty;
    }
    let chart = ChartSeries {
        bars: rows
            .iter()
            .map(|row| (row.label.clone(), row.count))
            .collect(),
    };
    BreakdownSection::Table { rows, chart }
}
