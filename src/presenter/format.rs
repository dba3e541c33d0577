//! Value coercion and display formatting shared by the presenter sections.

use serde_json::Value;

/// Marker shown wherever a numeric value is missing or not a number.
pub const NOT_AVAILABLE: &str = "n/a";

/// Return the value as `f64` when it is a JSON number.
///
/// Booleans are not numbers here, even though some producers treat them as 0/1.
pub(crate) fn as_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

/// Return the value as `i64` when it is a JSON integer, saturating large unsigned values.
pub(crate) fn as_integer(value: Option<&Value>) -> Option<i64> {
    let value = value?;
    value
        .as_i64()
        .or_else(|| value.as_u64().map(|v| i64::try_from(v).unwrap_or(i64::MAX)))
}

/// Lenient float coercion used for confidence columns.
///
/// Accepts JSON numbers and numeric strings; anything else becomes `None`.
pub(crate) fn coerce_float(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite()),
        _ => None,
    }
}

/// Text for label-like columns: strings verbatim, numbers stringified.
pub(crate) fn label_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Format a ratio as a percentage with two decimals (`0.8765` → `87.65%`).
pub fn percent_2dp(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a ratio as a percentage with one decimal (`0.4321` → `43.2%`).
pub fn percent_1dp(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Two-decimal percentage for an optional value, falling back to [`NOT_AVAILABLE`].
pub fn percent_or_na(value: Option<f64>) -> String {
    value
        .map(percent_2dp)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Turn a snake_case key into a display label (`f1_score` → `F1 Score`).
///
/// A letter starts a word when the previous character is not a letter; the
/// first letter of each word is upper-cased and the rest lower-cased.
pub fn display_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut prev_is_letter = false;
    for ch in spaced.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}
