use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrevalenceStats {
    pub source: StatsSource,
    pub condition: String,
    pub data: Vec<StateDatum>,
    pub retrieved_at: jiff::Timestamp,
}

/// One row of the regional prevalence table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StateDatum {
    pub state: String,
    #[ts(type = "number")]
    pub cases: u64,
    /// Percentage of the population, never negative.
    pub prevalence_rate: f64,
    pub age_group: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StatsSource {
    Generated,
    Mock,
    Error,
}
