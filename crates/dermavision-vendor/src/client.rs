use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use dermavision_core::credentials::CredentialSource;

use crate::error::VendorError;
use crate::request::VendorRequest;

pub const API_KEY_HEADER: &str = "X-API-KEY";

#[async_trait]
pub trait VisionVendor: Send + Sync {
    /// Whether both the endpoint and the key are available right now.
    fn is_configured(&self) -> bool;

    /// Forward one image and return the vendor's raw JSON reply.
    async fn analyze(&self, request: &VendorRequest) -> Result<Value, VendorError>;
}

/// HTTP client for the vendor endpoint. One request per call, no retry,
/// and the HTTP client's default timeout.
pub struct HttpVisionVendor {
    http: reqwest::Client,
    endpoint: Option<String>,
    api_key: CredentialSource,
}

impl HttpVisionVendor {
    pub fn new(endpoint: Option<String>, api_key: CredentialSource) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl VisionVendor for HttpVisionVendor {
    fn is_configured(&self) -> bool {
        self.endpoint.is_some() && self.api_key.is_configured()
    }

    async fn analyze(&self, request: &VendorRequest) -> Result<Value, VendorError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or_else(|| VendorError::NotConfigured("vendor endpoint".to_string()))?;
        let key = self.api_key.require("vendor API key")?;

        let response = self
            .http
            .post(endpoint)
            .header(API_KEY_HEADER, key)
            .json(request)
            .send()
            .await
            .map_err(|e| VendorError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| VendorError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(VendorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), body_len = body.len(), "vendor response received");

        serde_json::from_str(&body).map_err(|e| VendorError::Decode(e.to_string()))
    }
}
