use serde_json::Value;

use super::format::{self, NOT_AVAILABLE};

/// Column headers of the predictions table.
pub const PREDICTION_COLUMNS: [&str; 3] = ["Sentiment", "Confidence", "Comment"];

/// Notice shown instead of an empty predictions table.
pub const PREDICTIONS_EMPTY_NOTICE: &str = "No prediction data.";

/// One previewed prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionRow {
    /// Raw class label rendered as text; not shown in the default table.
    pub label: Option<String>,
    pub sentiment: String,
    /// `None` when the payload value is missing or not a valid float.
    pub confidence: Option<f64>,
    pub comment: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PredictionSection {
    Empty,
    Table {
        rows: Vec<PredictionRow>,
        /// Pretty-printed JSON of the same truncated slice, for diagnostics.
        raw_json: String,
    },
}

pub(super) fn prediction_section(payload: &Value, preview_rows: usize) -> PredictionSection {
    let entries = match payload.get("predictions").and_then(Value::as_array) {
        Some(entries) if !entries.is_empty() => entries,
        _ => return PredictionSection::Empty,
    };
    let preview = &entries[..entries.len().min(preview_rows)];
    let rows = preview.iter().map(prediction_row).collect();
    PredictionSection::Table {
        rows,
        raw_json: raw_json(preview),
    }
}

fn prediction_row(entry: &Value) -> PredictionRow {
    PredictionRow {
        label: format::label_text(entry.get("label")),
        sentiment: format::label_text(entry.get("label_text"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        confidence: format::coerce_float(entry.get("confidence")),
        comment: entry
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Two-space indented JSON with non-ASCII text left as-is.
fn raw_json(entries: &[Value]) -> String {
    // Serializing an in-memory `Value` cannot fail.
    serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn predictions(count: usize) -> Value {
        let items: Vec<Value> = (0..count)
            .map(|idx| {
                json!({
                    "label": idx % 3,
                    "label_text": "positive",
                    "confidence": 0.5,
                    "text": format!("comment {idx}")
                })
            })
            .collect();
        json!({ "predictions": items })
    }

    #[test]
    fn truncates_to_preview_rows_in_order() {
        let PredictionSection::Table { rows, raw_json } = prediction_section(&predictions(25), 20)
        else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0].comment, "comment 0");
        assert_eq!(rows[19].comment, "comment 19");
        let echoed: Vec<Value> = serde_json::from_str(&raw_json).unwrap();
        assert_eq!(echoed.len(), 20);
    }

    #[test]
    fn fewer_entries_than_preview_rows_keeps_all() {
        let PredictionSection::Table { rows, .. } = prediction_section(&predictions(3), 20) else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].label.as_deref(), Some("1"));
    }

    #[test]
    fn invalid_confidence_becomes_none() {
        let payload = json!({"predictions": [
            {"label_text": "negative", "confidence": "not-a-number", "text": "meh"},
            {"label_text": "neutral", "confidence": "0.25", "text": "ok"},
            {"label_text": "positive", "text": "nice"}
        ]});
        let PredictionSection::Table { rows, .. } = prediction_section(&payload, 20) else {
            panic!("expected a table");
        };
        assert_eq!(rows[0].confidence, None);
        assert_eq!(rows[1].confidence, Some(0.25));
        assert_eq!(rows[2].confidence, None);
    }

    #[test]
    fn raw_json_keeps_unicode_and_key_order() {
        let payload = json!({"predictions": [
            {"text": "bagus sekali 👍 café", "label_text": "positive", "confidence": 0.9}
        ]});
        let PredictionSection::Table { raw_json, .. } = prediction_section(&payload, 5) else {
            panic!("expected a table");
        };
        let expected = "[\n  {\n    \"text\": \"bagus sekali 👍 café\",\n    \"label_text\": \"positive\",\n    \"confidence\": 0.9\n  }\n]";
        assert_eq!(raw_json, expected);
    }

    #[test]
    fn missing_or_empty_predictions_is_notice() {
        assert_eq!(prediction_section(&json!({}), 20), PredictionSection::Empty);
        assert_eq!(
            prediction_section(&json!({"predictions": []}), 20),
            PredictionSection::Empty
        );
        assert_eq!(
            prediction_section(&json!({"predictions": {"a": 1}}), 20),
            PredictionSection::Empty
        );
    }

    #[test]
    fn non_object_entries_still_count_as_rows() {
        let payload = json!({"predictions": [42, {"label_text": "positive", "text": "hi"}]});
        let PredictionSection::Table { rows, .. } = prediction_section(&payload, 20) else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sentiment, "n/a");
        assert_eq!(rows[0].comment, "");
    }
}
