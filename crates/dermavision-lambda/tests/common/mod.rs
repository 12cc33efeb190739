#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;

use dermavision_genai::cache::{CachePolicy, ResolverCache};
use dermavision_genai::client::{ChatClient, ChatRequest};
use dermavision_genai::error::GenAiError;
use dermavision_genai::info::ConditionInfoResolver;
use dermavision_genai::stats::PrevalenceStatsResolver;
use dermavision_lambda::state::AppState;
use dermavision_vendor::client::VisionVendor;
use dermavision_vendor::error::VendorError;
use dermavision_vendor::request::VendorRequest;

pub enum VendorReply {
    Json(Value),
    Status(u16, String),
    Transport(String),
}

/// Vendor double that records the last forwarded request.
pub struct StubVendor {
    configured: bool,
    reply: VendorReply,
    pub last_request: Mutex<Option<VendorRequest>>,
}

impl StubVendor {
    pub fn new(reply: VendorReply) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            reply,
            last_request: Mutex::new(None),
        })
    }

    pub fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            configured: false,
            reply: VendorReply::Json(Value::Null),
            last_request: Mutex::new(None),
        })
    }

    pub fn forwarded(&self) -> Option<VendorRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl VisionVendor for StubVendor {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn analyze(&self, request: &VendorRequest) -> Result<Value, VendorError> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.reply {
            VendorReply::Json(value) => Ok(value.clone()),
            VendorReply::Status(status, body) => Err(VendorError::Status {
                status: *status,
                body: body.clone(),
            }),
            VendorReply::Transport(msg) => Err(VendorError::Transport(msg.clone())),
        }
    }
}

/// Chat double without a key: the resolvers serve their static content.
pub struct OfflineChat;

#[async_trait]
impl ChatClient for OfflineChat {
    fn is_configured(&self) -> bool {
        false
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<String, GenAiError> {
        panic!("offline chat client must not be called");
    }
}

pub fn test_app(vendor: Arc<dyn VisionVendor>) -> Router {
    let chat: Arc<dyn ChatClient> = Arc::new(OfflineChat);
    let state = AppState {
        vendor,
        info: Arc::new(ConditionInfoResolver::new(
            Arc::clone(&chat),
            Arc::new(ResolverCache::new(CachePolicy::default())),
        )),
        stats: Arc::new(PrevalenceStatsResolver::new(
            Arc::clone(&chat),
            Arc::new(ResolverCache::new(CachePolicy::default())),
        )),
        chat,
    };
    dermavision_lambda::app(state)
}

pub fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Origin", "https://app.example.com")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
