use thiserror::Error;

#[derive(Debug, Error)]
pub enum VendorError {
    #[error("vendor API is not configured: {0}")]
    NotConfigured(String),

    /// Non-2xx from the vendor. `body` is passed through verbatim.
    #[error("vendor returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("vendor request failed: {0}")]
    Transport(String),

    #[error("vendor response is not valid JSON: {0}")]
    Decode(String),
}

impl From<dermavision_core::error::CoreError> for VendorError {
    fn from(e: dermavision_core::error::CoreError) -> Self {
        VendorError::NotConfigured(e.to_string())
    }
}
