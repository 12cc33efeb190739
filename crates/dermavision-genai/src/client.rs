//! Chat-completion client.
//!
//! The resolvers talk to the generative API through the [`ChatClient`]
//! trait. [`OpenAiChatClient`] speaks the OpenAI-compatible
//! `/chat/completions` wire format; tests substitute scripted clients.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use dermavision_core::credentials::CredentialSource;

use crate::error::GenAiError;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

// ── Types ────────────────────────────────────────────────────────────────────

/// A single message in a completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
}

/// Everything a completion needs except the model and the key, which
/// belong to the client.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Whether a credential is available right now. Checked before every
    /// request so that a missing key short-circuits to fallback content.
    fn is_configured(&self) -> bool;

    /// Send one completion and return the first choice's text. A reply
    /// without choices or content yields an empty string.
    async fn complete(&self, request: &ChatRequest) -> Result<String, GenAiError>;
}

// ── OpenAI-compatible client ─────────────────────────────────────────────────

pub struct OpenAiChatClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: CredentialSource,
}

impl OpenAiChatClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: CredentialSource,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_configured()
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String, GenAiError> {
        let key = self.api_key.require("generative API key")?;

        let body = CompletionBody {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenAiError::Invocation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| GenAiError::ResponseParse(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        debug!(model = %self.model, reply_len = text.len(), "completion received");

        Ok(text)
    }
}
