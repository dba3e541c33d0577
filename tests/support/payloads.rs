use serde_json::{Value, json};

/// Payload shaped like a typical `/analyze` response.
pub fn full_payload(prediction_count: usize) -> Value {
    let predictions: Vec<Value> = (0..prediction_count)
        .map(|idx| {
            json!({
                "label": idx % 3,
                "label_text": (["negative", "neutral", "positive"][idx % 3]),
                "confidence": 0.5 + (idx % 5) as f64 / 10.0,
                "text": format!("komentar ke-{idx} sangat menarik ✨")
            })
        })
        .collect();
    json!({
        "video_id": "dQw4w9WgXcQ",
        "total_comments": prediction_count,
        "source_file": "comments_20240101.csv",
        "accuracy": 0.8765,
        "metrics": {
            "precision": 0.81,
            "recall": 0.79,
            "f1_score": 0.8,
            "accuracy": 0.8765,
            "support": "n/a"
        },
        "breakdown": [
            {"label_text": "positive", "count": 7, "ratio": 0.7},
            {"label_text": "negative", "count": 3, "ratio": 0.3}
        ],
        "predictions": predictions
    })
}
