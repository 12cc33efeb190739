//! Condition info resolver.
//!
//! Asks the generative API for a templated description of a condition and
//! parses it into a [`ConditionInfo`]. The resolver never fails: without a
//! key, or when the reply is empty or a refusal, it returns the static
//! fallback record; when the request itself fails it returns the same text
//! tagged [`InfoSource::Error`].
//!
//! The parser is deliberately lenient. A field is read from the first line
//! that starts with its label (bold or plain, any case), taking everything
//! after the first colon.

use std::sync::Arc;

use tracing::{info, warn};

use dermavision_core::models::condition_info::{ConditionInfo, InfoSource};

use crate::cache::{Cacheable, ResolverCache};
use crate::client::ChatClient;
use crate::prompts::{self, NOT_A_SKIN_CONDITION};

const DISEASE_NAME: &str = "Disease Name";
const DESCRIPTION: &str = "Description";
const COMMON_SYMPTOMS: &str = "Common Symptoms";
const CAUSES: &str = "Causes";
const PREVENTION_TREATMENT: &str = "Prevention & Treatment";

// ── Parsing ──────────────────────────────────────────────────────────────────

/// Fields pulled out of a templated reply. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFields {
    pub disease_name: Option<String>,
    pub description: Option<String>,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    pub prevention_treatment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReply {
    Parsed(TemplateFields),
    /// Empty reply or the model's refusal sentence.
    Unparseable,
}

pub fn parse_condition_reply(reply: &str) -> ParsedReply {
    let trimmed = reply.trim();
    if trimmed.is_empty() || trimmed == NOT_A_SKIN_CONDITION {
        return ParsedReply::Unparseable;
    }

    let lines: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    ParsedReply::Parsed(TemplateFields {
        disease_name: field(&lines, DISEASE_NAME),
        description: field(&lines, DESCRIPTION),
        symptoms: list_field(&lines, COMMON_SYMPTOMS),
        causes: list_field(&lines, CAUSES),
        prevention_treatment: field(&lines, PREVENTION_TREATMENT),
    })
}

/// Value of the first line labelled `label`, if that line has a non-empty
/// value after its colon.
fn field(lines: &[&str], label: &str) -> Option<String> {
    let line = lines.iter().find(|line| starts_with_label(line, label))?;
    let (_, value) = line.split_once(':')?;
    let value = value.trim_matches(|c: char| c == '*' || c.is_whitespace());
    (!value.is_empty()).then(|| value.to_string())
}

fn list_field(lines: &[&str], label: &str) -> Vec<String> {
    field(lines, label)
        .map(|value| {
            value
                .split([',', '•'])
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn starts_with_label(line: &str, label: &str) -> bool {
    let unbolded = line.trim_start_matches('*').trim_start();
    unbolded
        .get(..label.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(label))
}

// ── Fallback content ─────────────────────────────────────────────────────────

pub fn fallback_description(condition: &str) -> String {
    format!(
        "{condition} is a skin condition whose appearance and severity vary from person \
         to person. Detailed information could not be retrieved right now; a \
         dermatologist can confirm the diagnosis and explain what it means for you."
    )
}

pub const FALLBACK_PREVENTION_TREATMENT: &str = "\
Keep the affected area clean and moisturized, avoid scratching or known irritants, \
protect your skin from excessive sun, and consult a qualified dermatologist for \
diagnosis and treatment options.";

/// The static record returned whenever live content is unavailable.
pub fn fallback_info(condition: &str, source: InfoSource) -> ConditionInfo {
    ConditionInfo {
        condition: condition.to_string(),
        description: fallback_description(condition),
        symptoms: Vec::new(),
        causes: Vec::new(),
        prevention_treatment: FALLBACK_PREVENTION_TREATMENT.to_string(),
        source,
        raw: None,
        retrieved_at: jiff::Timestamp::now(),
    }
}

impl TemplateFields {
    /// Build a generated record, filling a missing description or treatment
    /// with the fallback text for that field only.
    pub fn into_info(self, condition: &str, raw: String) -> ConditionInfo {
        ConditionInfo {
            condition: self.disease_name.unwrap_or_else(|| condition.to_string()),
            description: self
                .description
                .unwrap_or_else(|| fallback_description(condition)),
            symptoms: self.symptoms,
            causes: self.causes,
            prevention_treatment: self
                .prevention_treatment
                .unwrap_or_else(|| FALLBACK_PREVENTION_TREATMENT.to_string()),
            source: InfoSource::Generated,
            raw: Some(raw),
            retrieved_at: jiff::Timestamp::now(),
        }
    }
}

// ── Resolver ─────────────────────────────────────────────────────────────────

impl Cacheable for ConditionInfo {
    fn is_cacheable(&self) -> bool {
        self.source != InfoSource::Error
    }
}

pub struct ConditionInfoResolver {
    client: Arc<dyn ChatClient>,
    cache: Arc<ResolverCache<ConditionInfo>>,
}

impl ConditionInfoResolver {
    pub fn new(client: Arc<dyn ChatClient>, cache: Arc<ResolverCache<ConditionInfo>>) -> Self {
        Self { client, cache }
    }

    pub async fn resolve(&self, condition: &str) -> ConditionInfo {
        let condition = condition.trim();
        self.cache
            .get_or_resolve(condition, || fetch(Arc::clone(&self.client), condition.to_string()))
            .await
    }
}

async fn fetch(client: Arc<dyn ChatClient>, condition: String) -> ConditionInfo {
    let condition = condition.as_str();
    if !client.is_configured() {
        info!(condition, "no generative API key, using fallback condition info");
        return fallback_info(condition, InfoSource::Fallback);
    }

    let request = prompts::condition_info_request(condition);
    match client.complete(&request).await {
        Ok(reply) => match parse_condition_reply(&reply) {
            ParsedReply::Parsed(fields) => {
                info!(condition, "condition info generated");
                fields.into_info(condition, reply)
            }
            ParsedReply::Unparseable => {
                info!(condition, "unusable condition info reply, using fallback");
                fallback_info(condition, InfoSource::Fallback)
            }
        },
        Err(e) => {
            warn!(condition, error = %e, "condition info request failed");
            fallback_info(condition, InfoSource::Error)
        }
    }
}
