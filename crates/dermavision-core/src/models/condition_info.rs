use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Educational description of a skin condition, as shown on the report
/// screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionInfo {
    pub condition: String,
    pub description: String,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    pub prevention_treatment: String,
    pub source: InfoSource,
    /// The unparsed model reply, kept for generated records only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub raw: Option<String>,
    pub retrieved_at: jiff::Timestamp,
}

/// Where a [`ConditionInfo`]'s content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InfoSource {
    Generated,
    Fallback,
    Error,
}
