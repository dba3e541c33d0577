use serde_json::Value;

use super::format::{self, NOT_AVAILABLE};

/// Fallback shown when the payload carries no usable video id.
pub const VIDEO_ID_UNAVAILABLE: &str = "(unavailable)";

/// Headline figures shown above every other section.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderMetrics {
    pub video_id: String,
    pub total_comments: i64,
    pub source_file: String,
    /// Raw accuracy when the payload carries a number.
    pub accuracy: Option<f64>,
    /// Two-decimal percentage or `n/a`.
    pub accuracy_label: String,
}

impl HeaderMetrics {
    /// Banner text confirming what was loaded.
    pub fn success_banner(&self) -> String {
        format!(
            "Loaded {} comments from {}",
            self.total_comments, self.source_file
        )
    }
}

pub(super) fn header_metrics(payload: &Value) -> HeaderMetrics {
    let video_id = payload
        .get("video_id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .unwrap_or(VIDEO_ID_UNAVAILABLE)
        .to_string();
    let source_file = payload
        .get("source_file")
        .and_then(Value::as_str)
        .unwrap_or(NOT_AVAILABLE)
        .to_string();
    let accuracy = format::as_number(payload.get("accuracy"));
    HeaderMetrics {
        video_id,
        total_comments: format::as_integer(payload.get("total_comments")).unwrap_or(0),
        source_file,
        accuracy,
        accuracy_label: format::percent_or_na(accuracy),
    }
}
