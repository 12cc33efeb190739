#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use dermavision_genai::client::{ChatClient, ChatRequest};
use dermavision_genai::error::GenAiError;

/// What a [`ScriptedChatClient`] answers with.
pub enum Script {
    Reply(String),
    Fail(u16, String),
}

/// Chat client that returns a fixed answer and counts its calls.
pub struct ScriptedChatClient {
    configured: bool,
    script: Script,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedChatClient {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            script: Script::Reply(reply.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            script: Script::Fail(status, body.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            configured: false,
            script: Script::Reply(String::new()),
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn slow(reply: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            script: Script::Reply(reply.to_string()),
            delay: Some(delay),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatClient for ScriptedChatClient {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<String, GenAiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Fail(status, body) => Err(GenAiError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
