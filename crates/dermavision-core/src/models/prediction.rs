use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::thresholds;

/// Label used when the vendor returned no conditions at all.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A single class prediction with its confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredLabel {
    pub label_name: String,
    pub confidence: f64,
}

impl ScoredLabel {
    pub fn unknown() -> Self {
        Self {
            label_name: UNKNOWN_LABEL.to_string(),
            confidence: 0.0,
        }
    }
}

/// Normalized vendor prediction.
///
/// Construct through [`Prediction::new`], which sorts the predictions,
/// mirrors the top entry into `top1_*` and derives `malignant_flag`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prediction {
    pub top1_label: String,
    pub top1_confidence: f64,
    pub top_predictions: Vec<ScoredLabel>,
    pub malignant_probability: f64,
    pub malignant_flag: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub model_version: Option<String>,
}

impl Prediction {
    pub fn new(
        mut top_predictions: Vec<ScoredLabel>,
        malignant_probability: f64,
        model_version: Option<String>,
    ) -> Self {
        for p in &mut top_predictions {
            p.confidence = clamp_unit(p.confidence);
        }
        // Stable sort keeps vendor order among equal confidences.
        top_predictions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        let top = top_predictions
            .first()
            .cloned()
            .unwrap_or_else(ScoredLabel::unknown);
        let malignant_probability = clamp_unit(malignant_probability);

        Self {
            top1_label: top.label_name,
            top1_confidence: top.confidence,
            top_predictions,
            malignant_probability,
            malignant_flag: thresholds::is_malignant(malignant_probability),
            model_version,
        }
    }
}

/// Map NaN and infinities to 0 and clamp into `[0, 1]`.
fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Risk block for the report screen. Banded at the display threshold,
/// independently of `malignant_flag`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MalignantRisk {
    pub probability: f64,
    pub threshold: f64,
    pub risk_label: String,
}

impl MalignantRisk {
    pub fn assess(probability: f64) -> Self {
        Self {
            probability,
            threshold: thresholds::RISK_DISPLAY_THRESHOLD,
            risk_label: thresholds::risk_label(probability).to_string(),
        }
    }
}

/// Successful relay response body:
/// `{ "success": true, ...prediction, "malignant_risk": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RelaySuccess {
    pub success: bool,
    #[serde(flatten)]
    pub prediction: Prediction,
    pub malignant_risk: MalignantRisk,
}

impl From<Prediction> for RelaySuccess {
    fn from(prediction: Prediction) -> Self {
        Self {
            success: true,
            malignant_risk: MalignantRisk::assess(prediction.malignant_probability),
            prediction,
        }
    }
}

/// Error body shared by every relay failure: `{ "success": false, "message": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RelayFailure {
    pub success: bool,
    pub message: String,
}

impl RelayFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
