use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use dermavision_genai::cache::ResolverCache;
use dermavision_genai::client::{ChatClient, OpenAiChatClient};
use dermavision_genai::info::ConditionInfoResolver;
use dermavision_genai::stats::PrevalenceStatsResolver;
use dermavision_lambda::config::Settings;
use dermavision_lambda::state::AppState;
use dermavision_vendor::client::HttpVisionVendor;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let settings = Settings::from_env();
    tracing::info!(
        vendor_endpoint = settings.vendor_api_url.is_some(),
        genai_model = %settings.genai_model,
        cache_max_entries = ?settings.cache_policy.max_entries,
        cache_ttl_secs = ?settings.cache_policy.ttl.map(|t| t.as_secs()),
        "starting dermavision lambda"
    );

    let chat: Arc<dyn ChatClient> = Arc::new(OpenAiChatClient::new(
        settings.genai_api_url.clone(),
        settings.genai_model.clone(),
        Settings::genai_api_key(),
    ));

    let state = AppState {
        vendor: Arc::new(HttpVisionVendor::new(
            settings.vendor_api_url.clone(),
            Settings::vendor_api_key(),
        )),
        info: Arc::new(ConditionInfoResolver::new(
            Arc::clone(&chat),
            Arc::new(ResolverCache::new(settings.cache_policy)),
        )),
        stats: Arc::new(PrevalenceStatsResolver::new(
            Arc::clone(&chat),
            Arc::new(ResolverCache::new(settings.cache_policy)),
        )),
        chat,
    };

    lambda_http::run(dermavision_lambda::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
