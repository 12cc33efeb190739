use serde_json::json;

use dermavision_vendor::request::{strip_data_url_prefix, RelayRequest};

fn relay_request(value: serde_json::Value) -> RelayRequest {
    serde_json::from_value(value).unwrap()
}

#[test]
fn data_url_prefix_is_stripped() {
    assert_eq!(strip_data_url_prefix("data:image/jpeg;base64,/9j/4AAQ"), "/9j/4AAQ");
    assert_eq!(strip_data_url_prefix("/9j/4AAQ"), "/9j/4AAQ");
}

#[test]
fn data_url_request_is_forwarded_without_prefix() {
    let request = relay_request(json!({
        "imageDataUrl": "data:image/png;base64,iVBORw0KGgo",
        "age": 42,
        "sex": "female",
        "body_part": "forearm"
    }))
    .into_vendor_request()
    .unwrap();

    assert_eq!(request.image, "iVBORw0KGgo");
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "image": "iVBORw0KGgo", "age": 42, "sex": "female", "body_part": "forearm" })
    );
}

#[test]
fn base64_field_is_preferred() {
    let request = relay_request(json!({
        "imageDataUrl": "data:image/png;base64,AAAA",
        "imageBase64": "BBBB"
    }))
    .into_vendor_request()
    .unwrap();
    assert_eq!(request.image, "BBBB");
}

#[test]
fn blank_base64_falls_through_to_data_url() {
    let request = relay_request(json!({
        "imageDataUrl": "data:image/png;base64,AAAA",
        "imageBase64": "   "
    }))
    .into_vendor_request()
    .unwrap();
    assert_eq!(request.image, "AAAA");
}

#[test]
fn missing_image_is_rejected() {
    assert!(relay_request(json!({ "age": 30 })).into_vendor_request().is_none());
    assert!(relay_request(json!({ "imageDataUrl": "" })).into_vendor_request().is_none());
}

#[test]
fn optional_metadata_is_omitted() {
    let request = relay_request(json!({ "imageBase64": "CCCC" }))
        .into_vendor_request()
        .unwrap();
    assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "image": "CCCC" }));
}
