use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("completion request failed: {0}")]
    Invocation(String),

    #[error("completion API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error(transparent)]
    Credential(#[from] dermavision_core::error::CoreError),
}
