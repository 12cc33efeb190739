use dermavision_core::models::prediction::{
    MalignantRisk, Prediction, RelayFailure, RelaySuccess, ScoredLabel,
};

fn scored(label: &str, confidence: f64) -> ScoredLabel {
    ScoredLabel {
        label_name: label.to_string(),
        confidence,
    }
}

#[test]
fn predictions_are_sorted_and_mirrored() {
    let prediction = Prediction::new(
        vec![scored("Eczema", 0.2), scored("Melanoma", 0.7), scored("Psoriasis", 0.1)],
        0.6,
        None,
    );

    let confidences: Vec<f64> = prediction
        .top_predictions
        .iter()
        .map(|p| p.confidence)
        .collect();
    assert_eq!(confidences, vec![0.7, 0.2, 0.1]);
    assert_eq!(prediction.top1_label, "Melanoma");
    assert_eq!(prediction.top1_confidence, prediction.top_predictions[0].confidence);
    assert!(prediction.malignant_flag);
}

#[test]
fn empty_predictions_use_unknown_sentinel() {
    let prediction = Prediction::new(Vec::new(), 0.0, None);
    assert_eq!(prediction.top1_label, "Unknown");
    assert_eq!(prediction.top1_confidence, 0.0);
    assert!(prediction.top_predictions.is_empty());
    assert!(!prediction.malignant_flag);
}

#[test]
fn flag_boundary_is_inclusive() {
    assert!(Prediction::new(Vec::new(), 0.5, None).malignant_flag);
    assert!(!Prediction::new(Vec::new(), 0.4999, None).malignant_flag);
}

#[test]
fn out_of_range_values_are_clamped() {
    let prediction = Prediction::new(vec![scored("A", 1.7), scored("B", f64::NAN)], -3.0, None);
    assert_eq!(prediction.top1_confidence, 1.0);
    assert_eq!(prediction.top_predictions[1].confidence, 0.0);
    assert_eq!(prediction.malignant_probability, 0.0);
}

#[test]
fn success_body_is_flattened() {
    let body = RelaySuccess::from(Prediction::new(
        vec![scored("Melanoma", 0.9)],
        0.8,
        Some("v2".to_string()),
    ));
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["top1_label"], "Melanoma");
    assert_eq!(json["model_version"], "v2");
    assert_eq!(json["top_predictions"][0]["label_name"], "Melanoma");
    assert_eq!(
        json["malignant_risk"],
        serde_json::json!({ "probability": 0.8, "threshold": 0.3, "risk_label": "High risk" })
    );
}

#[test]
fn risk_block_uses_display_cutoff_not_flag_cutoff() {
    let body = RelaySuccess::from(Prediction::new(vec![scored("Nevus", 0.7)], 0.4, None));
    assert!(!body.prediction.malignant_flag);
    assert_eq!(body.malignant_risk.risk_label, "High risk");

    let low = MalignantRisk::assess(0.12);
    assert_eq!(low.risk_label, "Low risk");
    assert_eq!(low.threshold, 0.30);
}

#[test]
fn failure_body_shape() {
    let json = serde_json::to_value(RelayFailure::new("rate limited")).unwrap();
    assert_eq!(json, serde_json::json!({ "success": false, "message": "rate limited" }));
}
