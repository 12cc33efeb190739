//! Prevalence stats resolver.
//!
//! Asks the generative API for a JSON array of per-state figures, cleans the
//! reply up and sanitizes every row. Like the info resolver it never fails:
//! without a key it serves the standard mock table, and when the request or
//! the JSON fails it serves the smaller degraded table tagged
//! [`StatsSource::Error`].

use std::ops::RangeInclusive;
use std::sync::{Arc, LazyLock};

use rand::Rng;
use regex::Regex;
use serde_json::Value;
use tracing::{info, warn};

use dermavision_core::models::prevalence::{PrevalenceStats, StateDatum, StatsSource};

use crate::cache::{Cacheable, ResolverCache};
use crate::client::ChatClient;
use crate::prompts;

pub const UNKNOWN_STATE: &str = "Unknown";
pub const DEFAULT_AGE_GROUP: &str = "20-40";

/// Range for substituted case counts.
pub const PLAUSIBLE_CASES: RangeInclusive<u64> = 1_000..=50_000;
/// Range for substituted prevalence rates, in percent.
pub const PLAUSIBLE_RATE: RangeInclusive<f64> = 0.5..=10.0;

static JSON_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"));

// ── Mock tables ──────────────────────────────────────────────────────────────

/// Which static table to serve.
///
/// The two tables differ in size and values. It is unclear whether that is
/// intended, so both are kept as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockVariant {
    /// No generative key configured.
    Standard,
    /// The request or its JSON failed.
    Degraded,
}

impl MockVariant {
    pub fn source(self) -> StatsSource {
        match self {
            MockVariant::Standard => StatsSource::Mock,
            MockVariant::Degraded => StatsSource::Error,
        }
    }

    pub fn rows(self) -> Vec<StateDatum> {
        let table: &[(&str, u64, f64, &str)] = match self {
            MockVariant::Standard => &[
                ("Maharashtra", 12_450, 3.2, "20-40"),
                ("Uttar Pradesh", 15_820, 2.8, "18-35"),
                ("Tamil Nadu", 9_340, 3.5, "25-45"),
                ("West Bengal", 8_760, 2.9, "20-40"),
                ("Karnataka", 7_980, 3.1, "30-50"),
                ("Gujarat", 6_540, 2.6, "18-35"),
            ],
            MockVariant::Degraded => &[
                ("Delhi", 5_200, 2.4, "20-40"),
                ("Kerala", 4_100, 3.8, "30-50"),
                ("Rajasthan", 3_900, 1.9, "18-35"),
                ("Punjab", 3_300, 2.2, "25-45"),
            ],
        };

        table
            .iter()
            .map(|&(state, cases, prevalence_rate, age_group)| StateDatum {
                state: state.to_string(),
                cases,
                prevalence_rate,
                age_group: age_group.to_string(),
            })
            .collect()
    }
}

pub fn mock_stats(condition: &str, variant: MockVariant) -> PrevalenceStats {
    PrevalenceStats {
        source: variant.source(),
        condition: condition.to_string(),
        data: variant.rows(),
        retrieved_at: jiff::Timestamp::now(),
    }
}

// ── Reply cleanup ────────────────────────────────────────────────────────────

/// Remove markdown code-fence markers and surrounding whitespace.
pub fn strip_code_fences(reply: &str) -> String {
    reply.replace("```json", "").replace("```", "").trim().to_string()
}

/// Extract the JSON array from a reply: parse it whole, or else the span
/// from the first `[` to the last `]`. `None` if neither is an array.
pub fn extract_rows(reply: &str) -> Option<Vec<Value>> {
    let cleaned = strip_code_fences(reply);

    let value = serde_json::from_str::<Value>(&cleaned).ok().or_else(|| {
        let span = JSON_ARRAY.find(&cleaned)?;
        serde_json::from_str::<Value>(span.as_str()).ok()
    })?;

    match value {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

// ── Row sanitization ─────────────────────────────────────────────────────────

/// Sanitize parsed rows, dropping any whose state resolves to "unknown".
pub fn sanitize_rows<R: Rng>(items: &[Value], rng: &mut R) -> Vec<StateDatum> {
    items
        .iter()
        .filter_map(|item| sanitize_row(item, rng))
        .collect()
}

fn sanitize_row<R: Rng>(item: &Value, rng: &mut R) -> Option<StateDatum> {
    let state = item
        .get("state")
        .and_then(coerce_string)
        .unwrap_or_else(|| UNKNOWN_STATE.to_string());
    if state.eq_ignore_ascii_case(UNKNOWN_STATE) {
        return None;
    }

    let age_group = item
        .get("age_group")
        .and_then(coerce_string)
        .unwrap_or_else(|| DEFAULT_AGE_GROUP.to_string());

    let cases = item
        .get("cases")
        .and_then(coerce_number)
        .map(|n| n.round() as u64)
        .unwrap_or_else(|| rng.gen_range(PLAUSIBLE_CASES));

    let prevalence_rate = item
        .get("prevalence_rate")
        .and_then(coerce_number)
        .unwrap_or_else(|| round2(rng.gen_range(PLAUSIBLE_RATE)));

    Some(StateDatum {
        state,
        cases,
        prevalence_rate,
        age_group,
    })
}

fn coerce_string(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// A finite, non-negative number from a JSON number or numeric string.
fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n >= 0.0).then_some(n)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ── Resolver ─────────────────────────────────────────────────────────────────

impl Cacheable for PrevalenceStats {
    fn is_cacheable(&self) -> bool {
        self.source != StatsSource::Error
    }
}

pub struct PrevalenceStatsResolver {
    client: Arc<dyn ChatClient>,
    cache: Arc<ResolverCache<PrevalenceStats>>,
}

impl PrevalenceStatsResolver {
    pub fn new(client: Arc<dyn ChatClient>, cache: Arc<ResolverCache<PrevalenceStats>>) -> Self {
        Self { client, cache }
    }

    pub async fn resolve(&self, condition: &str) -> PrevalenceStats {
        let condition = condition.trim();
        self.cache
            .get_or_resolve(condition, || fetch(Arc::clone(&self.client), condition.to_string()))
            .await
    }
}

async fn fetch(client: Arc<dyn ChatClient>, condition: String) -> PrevalenceStats {
    let condition = condition.as_str();
    if !client.is_configured() {
        info!(condition, "no generative API key, using mock prevalence stats");
        return mock_stats(condition, MockVariant::Standard);
    }

    let request = prompts::prevalence_stats_request(condition);
    let reply = match client.complete(&request).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(condition, error = %e, "prevalence stats request failed");
            return mock_stats(condition, MockVariant::Degraded);
        }
    };

    let Some(items) = extract_rows(&reply) else {
        warn!(condition, "prevalence stats reply is not a JSON array");
        return mock_stats(condition, MockVariant::Degraded);
    };

    let data = sanitize_rows(&items, &mut rand::thread_rng());
    info!(
        condition,
        rows = data.len(),
        dropped = items.len() - data.len(),
        "prevalence stats generated"
    );

    PrevalenceStats {
        source: StatsSource::Generated,
        condition: condition.to_string(),
        data,
        retrieved_at: jiff::Timestamp::now(),
    }
}
