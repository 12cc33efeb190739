//! Human-readable names for model class identifiers.
//!
//! The vision model reports opaque identifiers such as `Class_17` or the
//! HAM10000 short codes (`mel`, `bkl`, ...). [`display_name`] turns any
//! label into something presentable; [`query_name`] picks the string the
//! condition resolvers should be asked about.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Known identifiers and their clinical names. Keys are matched
/// case-insensitively.
const CLINICAL_NAMES: &[(&str, &str)] = &[
    ("class_0", "Actinic keratosis"),
    ("class_1", "Basal cell carcinoma"),
    ("class_2", "Benign keratosis"),
    ("class_3", "Dermatofibroma"),
    ("class_4", "Melanoma"),
    ("class_5", "Melanocytic nevus"),
    ("class_6", "Squamous cell carcinoma"),
    ("class_7", "Vascular lesion"),
    ("class_8", "Acne vulgaris"),
    ("class_9", "Eczema"),
    ("class_10", "Psoriasis"),
    ("class_11", "Rosacea"),
    ("class_12", "Vitiligo"),
    ("class_13", "Common warts"),
    ("class_14", "Tinea corporis"),
    ("class_15", "Impetigo"),
    ("class_16", "Contact dermatitis"),
    ("class_17", "Seborrheic keratosis"),
    ("class_18", "Urticaria"),
    ("class_19", "Lichen planus"),
    ("class_20", "Herpes zoster"),
    ("class_21", "Scabies"),
    ("class_22", "Molluscum contagiosum"),
    ("class_23", "Seborrheic dermatitis"),
    ("class_24", "Alopecia areata"),
    // HAM10000 short codes
    ("akiec", "Actinic keratosis"),
    ("bcc", "Basal cell carcinoma"),
    ("bkl", "Benign keratosis"),
    ("df", "Dermatofibroma"),
    ("mel", "Melanoma"),
    ("nv", "Melanocytic nevus"),
    ("vasc", "Vascular lesion"),
];

static CLASS_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^class[_\- ]?(\d+)$").expect("valid regex"));

static CLASS_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^class[_\- ]?").expect("valid regex"));

/// One row of the label table, as served to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KnownLabel {
    pub label: String,
    pub name: String,
}

/// Clinical name for `label`, if the table knows it.
pub fn clinical_name(label: &str) -> Option<&'static str> {
    let label = label.trim();
    CLINICAL_NAMES
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(label))
        .map(|(_, name)| *name)
}

/// Presentable name for any model label.
///
/// - Known identifiers map to their clinical name.
/// - Unknown `Class_<n>` identifiers become `Condition <n>`.
/// - Anything else loses a leading `class` prefix, has underscores turned
///   into spaces, and is title-cased word by word.
pub fn display_name(label: &str) -> String {
    let label = label.trim();
    if let Some(name) = clinical_name(label) {
        return name.to_string();
    }
    if let Some(caps) = CLASS_NUMBER.captures(label) {
        return format!("Condition {}", &caps[1]);
    }

    let stripped = CLASS_PREFIX.replace(label, "").replace('_', " ");
    let words: Vec<String> = stripped.split_whitespace().map(title_case).collect();
    if words.is_empty() {
        return crate::models::prediction::UNKNOWN_LABEL.to_string();
    }
    words.join(" ")
}

/// The string to send to the condition resolvers: the clinical name when
/// known, otherwise the label untouched.
pub fn query_name(label: &str) -> String {
    clinical_name(label)
        .map(str::to_string)
        .unwrap_or_else(|| label.to_string())
}

pub fn known_labels() -> Vec<KnownLabel> {
    CLINICAL_NAMES
        .iter()
        .map(|(label, name)| KnownLabel {
            label: label.to_string(),
            name: name.to_string(),
        })
        .collect()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
