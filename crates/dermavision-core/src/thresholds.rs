//! Malignancy thresholds.
//!
//! The relay flags a prediction as malignant at [`MALIGNANT_FLAG_THRESHOLD`],
//! while the report screen bands risk at [`RISK_DISPLAY_THRESHOLD`]. The two
//! disagree.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Cutoff for `malignant_flag` in relay responses.
pub const MALIGNANT_FLAG_THRESHOLD: f64 = 0.5;

/// Cutoff for the "High risk" band on the report screen.
pub const RISK_DISPLAY_THRESHOLD: f64 = 0.30;

pub fn is_malignant(probability: f64) -> bool {
    probability >= MALIGNANT_FLAG_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    Low,
    High,
}

impl RiskBand {
    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low risk",
            RiskBand::High => "High risk",
        }
    }
}

pub fn risk_band(probability: f64) -> RiskBand {
    if probability < RISK_DISPLAY_THRESHOLD {
        RiskBand::Low
    } else {
        RiskBand::High
    }
}

/// Text shown next to the malignant probability on the report screen.
pub fn risk_label(probability: f64) -> &'static str {
    risk_band(probability).label()
}
