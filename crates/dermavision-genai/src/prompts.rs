//! Prompts and sampling settings for the two resolver requests.

use crate::client::{ChatMessage, ChatRequest};

/// The exact sentence the model is told to answer with for non-skin topics.
pub const NOT_A_SKIN_CONDITION: &str = "Not a skin-related condition.";

const INFO_SYSTEM_PROMPT: &str = "\
You are a dermatology assistant writing short patient-education notes. \
Be factual and cautious, and never give a diagnosis.";

const STATS_SYSTEM_PROMPT: &str = "\
You produce illustrative epidemiology tables for a dermatology education app. \
Respond with raw JSON only.";

const INFO_TEMPERATURE: f32 = 0.3;
const INFO_MAX_TOKENS: u32 = 500;
const STATS_TEMPERATURE: f32 = 0.4;
const STATS_MAX_TOKENS: u32 = 400;

pub fn condition_info_request(condition: &str) -> ChatRequest {
    let user = format!(
        "Describe the skin condition \"{condition}\".\n\
         Answer using exactly this template and nothing else:\n\
         **Disease Name:** <name>\n\
         **Description:** <two or three sentences>\n\
         **Common Symptoms:** <comma-separated list>\n\
         **Causes:** <comma-separated list>\n\
         **Prevention & Treatment:** <two or three sentences>\n\
         If \"{condition}\" is not a skin-related condition, reply with exactly: \
         {NOT_A_SKIN_CONDITION}"
    );

    ChatRequest {
        messages: vec![ChatMessage::system(INFO_SYSTEM_PROMPT), ChatMessage::user(user)],
        temperature: INFO_TEMPERATURE,
        max_tokens: INFO_MAX_TOKENS,
    }
}

pub fn prevalence_stats_request(condition: &str) -> ChatRequest {
    let user = format!(
        "Give estimated regional statistics for \"{condition}\" across Indian states.\n\
         Return ONLY a raw JSON array (no markdown, no code fences, no commentary) \
         of 4 to 8 objects with these keys:\n\
         - \"state\": state name\n\
         - \"cases\": integer between 1000 and 50000\n\
         - \"prevalence_rate\": percentage between 0.5 and 10, two decimals\n\
         - \"age_group\": most affected age range such as \"20-40\""
    );

    ChatRequest {
        messages: vec![ChatMessage::system(STATS_SYSTEM_PROMPT), ChatMessage::user(user)],
        temperature: STATS_TEMPERATURE,
        max_tokens: STATS_MAX_TOKENS,
    }
}
