use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sentidash::presenter::present;
use serde_json::{Value, json};

const PREDICTION_COUNTS: [usize; 2] = [100, 10_000];

fn payload(prediction_count: usize) -> Value {
    let predictions: Vec<Value> = (0..prediction_count)
        .map(|i| {
            json!({
                "label": i % 3,
                "label_text": ["negative", "neutral", "positive"][i % 3],
                "confidence": (i % 100) as f64 / 100.0,
                "text": format!("comment number {i}")
            })
        })
        .collect();
    json!({
        "video_id": "bench",
        "total_comments": prediction_count,
        "accuracy": 0.9,
        "metrics": {"accuracy": 0.9, "f1_score": 0.88, "precision": 0.87, "recall": 0.86},
        "breakdown": [
            {"label_text": "negative", "count": prediction_count / 3, "ratio": 0.33},
            {"label_text": "neutral", "count": prediction_count / 3, "ratio": 0.33},
            {"label_text": "positive", "count": prediction_count / 3, "ratio": 0.34}
        ],
        "predictions": predictions
    })
}

fn bench_present(c: &mut Criterion) {
    for count in PREDICTION_COUNTS {
        let payload = payload(count);
        c.bench_with_input(BenchmarkId::new("present", count), &payload, |b, payload| {
            b.iter(|| present(black_box(payload), 100));
        });
    }
}

criterion_group!(benches, bench_present);
criterion_main!(benches);
