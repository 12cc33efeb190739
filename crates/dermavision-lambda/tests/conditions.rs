mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, get, test_app, StubVendor, VendorReply};

fn app() -> axum::Router {
    test_app(StubVendor::new(VendorReply::Json(json!({}))))
}

#[tokio::test]
async fn info_translates_class_ids() {
    let response = app().oneshot(get("/conditions/Class_9/info")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["condition"], "Eczema");
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["symptoms"], json!([]));
}

#[tokio::test]
async fn stats_without_key_serve_mock_table() {
    let response = app()
        .oneshot(get("/conditions/Psoriasis/stats"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["source"], "mock");
    assert_eq!(body["condition"], "Psoriasis");
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn encoded_condition_names_are_decoded() {
    let response = app()
        .oneshot(get("/conditions/Atopic%20dermatitis/info"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["condition"], "Atopic dermatitis");
}

#[tokio::test]
async fn label_names_are_resolved() {
    let body = body_json(app().oneshot(get("/labels/Class_999")).await.unwrap()).await;
    assert_eq!(
        body,
        json!({ "label": "Class_999", "display_name": "Condition 999", "query_name": "Class_999" })
    );

    let body = body_json(app().oneshot(get("/labels/Class_17")).await.unwrap()).await;
    assert_eq!(body["display_name"], "Seborrheic keratosis");
    assert_eq!(body["query_name"], "Seborrheic keratosis");
}

#[tokio::test]
async fn classes_lists_the_label_table() {
    let body = body_json(app().oneshot(get("/classes")).await.unwrap()).await;
    let classes = body["classes"].as_array().unwrap();
    assert_eq!(body["total"], classes.len());
    assert!(classes.contains(&json!({ "label": "class_17", "name": "Seborrheic keratosis" })));
}

#[tokio::test]
async fn health_reports_configuration() {
    let body = body_json(app().oneshot(get("/health")).await.unwrap()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "dermavision-lambda");
    assert_eq!(body["vendor_configured"], true);
    assert_eq!(body["genai_configured"], false);
}
