use axum::extract::{Path, State};
use axum::Json;

use dermavision_core::labels::query_name;
use dermavision_core::models::condition_info::ConditionInfo;
use dermavision_core::models::prevalence::PrevalenceStats;

use crate::state::AppState;

/// Educational info for a condition. Model class identifiers are accepted
/// and translated to their clinical name first.
pub async fn condition_info(
    State(state): State<AppState>,
    Path(condition): Path<String>,
) -> Json<ConditionInfo> {
    Json(state.info.resolve(&query_name(&condition)).await)
}

pub async fn condition_stats(
    State(state): State<AppState>,
    Path(condition): Path<String>,
) -> Json<PrevalenceStats> {
    Json(state.stats.resolve(&query_name(&condition)).await)
}
