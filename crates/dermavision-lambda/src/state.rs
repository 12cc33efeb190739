use std::sync::Arc;

use dermavision_genai::client::ChatClient;
use dermavision_genai::info::ConditionInfoResolver;
use dermavision_genai::stats::PrevalenceStatsResolver;
use dermavision_vendor::client::VisionVendor;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub vendor: Arc<dyn VisionVendor>,
    pub chat: Arc<dyn ChatClient>,
    pub info: Arc<ConditionInfoResolver>,
    pub stats: Arc<PrevalenceStatsResolver>,
}
