//! dermavision-lambda
//!
//! The serverless HTTP surface: the vendor prediction relay plus read-only
//! endpoints for condition info, prevalence stats and label names.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/classes", get(routes::labels::list_classes))
        .route("/labels/{label}", get(routes::labels::label_names))
        // Relay
        .route(
            "/predict",
            post(routes::predict::predict).fallback(routes::predict::method_not_allowed),
        )
        // Resolvers
        .route(
            "/conditions/{condition}/info",
            get(routes::conditions::condition_info),
        )
        .route(
            "/conditions/{condition}/stats",
            get(routes::conditions::condition_stats),
        )
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .layer(axum_mw::from_fn(middleware::preflight::preflight_ok))
        .with_state(state)
}
