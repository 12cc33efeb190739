use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use dermavision_core::labels::{display_name, known_labels, query_name, KnownLabel};

#[derive(Serialize)]
pub struct LabelNames {
    label: String,
    display_name: String,
    query_name: String,
}

#[derive(Serialize)]
pub struct ClassList {
    classes: Vec<KnownLabel>,
    total: usize,
}

pub async fn list_classes() -> Json<ClassList> {
    let classes = known_labels();
    Json(ClassList {
        total: classes.len(),
        classes,
    })
}

pub async fn label_names(Path(label): Path<String>) -> Json<LabelNames> {
    Json(LabelNames {
        display_name: display_name(&label),
        query_name: query_name(&label),
        label,
    })
}
