mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use dermavision_core::credentials::CredentialSource;
use dermavision_vendor::client::HttpVisionVendor;

use common::{body_json, json_post, test_app};

/// Start a vendor endpoint that always answers with `status` and `body`.
async fn vendor_answering(status: StatusCode, body: &'static str) -> Arc<HttpVisionVendor> {
    let app = Router::new().route("/analyze", post(move || async move { (status, body) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    Arc::new(HttpVisionVendor::new(
        Some(format!("http://{addr}/analyze")),
        CredentialSource::inline("vendor-key"),
    ))
}

#[tokio::test]
async fn vendor_rate_limit_reaches_the_client() {
    let vendor = vendor_answering(StatusCode::SERVICE_UNAVAILABLE, "rate limited").await;

    let response = test_app(vendor)
        .oneshot(json_post("/predict", &json!({ "imageBase64": "AAAA" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "message": "rate limited" })
    );
}

#[tokio::test]
async fn non_json_vendor_reply_is_internal_error() {
    let vendor = vendor_answering(StatusCode::OK, "<html>maintenance</html>").await;

    let response = test_app(vendor)
        .oneshot(json_post("/predict", &json!({ "imageBase64": "AAAA" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("not valid JSON"));
}

#[tokio::test]
async fn vendor_json_is_normalized_end_to_end() {
    let vendor = vendor_answering(
        StatusCode::OK,
        r#"{"conditions":[{"name":"Psoriasis","score":0.44}],"risk":{"malignant_probability":0.05}}"#,
    )
    .await;

    let response = test_app(vendor)
        .oneshot(json_post("/predict", &json!({ "imageDataUrl": "data:image/png;base64,AAAA" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["top1_label"], "Psoriasis");
    assert_eq!(body["top1_confidence"], 0.44);
    assert_eq!(body["malignant_flag"], false);
    assert_eq!(body["malignant_risk"]["risk_label"], "Low risk");
}
