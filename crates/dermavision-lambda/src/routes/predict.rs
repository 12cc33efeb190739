use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::{Extension, Json};
use tracing::info;

use dermavision_core::models::prediction::RelaySuccess;
use dermavision_vendor::normalize::normalize;
use dermavision_vendor::request::RelayRequest;

use crate::error::ApiError;
use crate::middleware::request_log::RequestId;
use crate::state::AppState;

/// Relay one image to the vision vendor and return the normalized
/// prediction.
pub async fn predict(
    State(state): State<AppState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<RelaySuccess>, ApiError> {
    if !state.vendor.is_configured() {
        return Err(ApiError::Configuration(
            "vendor API credentials are not configured".to_string(),
        ));
    }

    if !is_json(&headers) {
        return Err(ApiError::BadRequest(
            "Content-Type must be application/json".to_string(),
        ));
    }

    let request: RelayRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))?;

    let vendor_request = request.into_vendor_request().ok_or_else(|| {
        ApiError::BadRequest("imageDataUrl or imageBase64 is required".to_string())
    })?;

    info!(
        request_id = %request_id,
        image_len = vendor_request.image.len(),
        "forwarding image to vendor"
    );

    let raw = state.vendor.analyze(&vendor_request).await?;
    let prediction = normalize(&raw);

    info!(
        request_id = %request_id,
        top1_label = %prediction.top1_label,
        top1_confidence = prediction.top1_confidence,
        malignant_flag = prediction.malignant_flag,
        "prediction relayed"
    );

    Ok(Json(prediction.into()))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim().to_ascii_lowercase().starts_with("application/json"))
}
