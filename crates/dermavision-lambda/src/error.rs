use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use dermavision_core::models::prediction::RelayFailure;
use dermavision_vendor::error::VendorError;

/// Unified API error type. Every variant renders as
/// `{ "success": false, "message": ... }`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    MethodNotAllowed,
    Configuration(String),
    /// Non-2xx from the vendor, relayed with its status and raw body.
    Upstream { status: u16, body: String },
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method not allowed".to_string(),
            ),
            ApiError::Configuration(msg) => {
                tracing::error!("configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Upstream { status, body } => {
                tracing::warn!(status, "vendor returned an error");
                (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                    body,
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(RelayFailure::new(message))).into_response()
    }
}

impl From<VendorError> for ApiError {
    fn from(e: VendorError) -> Self {
        match e {
            VendorError::NotConfigured(_) => ApiError::Configuration(e.to_string()),
            VendorError::Status { status, body } => ApiError::Upstream { status, body },
            other => ApiError::Internal(other.to_string()),
        }
    }
}
