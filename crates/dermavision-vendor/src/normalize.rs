//! Vendor response normalization.
//!
//! The vendor reports `conditions[]` entries with a `name` and either a
//! `probability` or a `score`, plus an optional `risk.malignant_probability`.
//! Missing or non-numeric values read as 0 and missing names as `Unknown`;
//! [`Prediction::new`] then sorts and derives the top-1 and flag fields.

use serde_json::Value;

use dermavision_core::models::prediction::{Prediction, ScoredLabel, UNKNOWN_LABEL};

pub fn normalize(raw: &Value) -> Prediction {
    let predictions = raw
        .get("conditions")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(scored_label).collect())
        .unwrap_or_default();

    let malignant_probability = raw
        .get("risk")
        .and_then(|risk| risk.get("malignant_probability"))
        .and_then(Value::as_f64)
        .unwrap_or(0.0);

    let model_version = raw
        .get("model_version")
        .or_else(|| raw.get("version"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Prediction::new(predictions, malignant_probability, model_version)
}

fn scored_label(item: &Value) -> ScoredLabel {
    let label_name = item
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_LABEL)
        .to_string();

    let confidence = item
        .get("probability")
        .and_then(Value::as_f64)
        .or_else(|| item.get("score").and_then(Value::as_f64))
        .unwrap_or(0.0);

    ScoredLabel {
        label_name,
        confidence,
    }
}
