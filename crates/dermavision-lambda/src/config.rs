//! Runtime settings read from the Lambda environment.
//!
//! API keys are not part of [`Settings`]: they stay as
//! [`CredentialSource::Env`] lookups and are read on every call.

use std::time::Duration;

use dermavision_core::credentials::CredentialSource;
use dermavision_genai::cache::{CachePolicy, DEFAULT_MAX_ENTRIES, DEFAULT_TTL};
use dermavision_genai::client::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

pub const VENDOR_API_URL: &str = "VENDOR_API_URL";
pub const VENDOR_API_KEY: &str = "VENDOR_API_KEY";
pub const GENAI_API_URL: &str = "GENAI_API_URL";
pub const GENAI_API_KEY: &str = "GENAI_API_KEY";
pub const GENAI_MODEL: &str = "GENAI_MODEL";
pub const CACHE_MAX_ENTRIES: &str = "CACHE_MAX_ENTRIES";
pub const CACHE_TTL_SECS: &str = "CACHE_TTL_SECS";

#[derive(Debug, Clone)]
pub struct Settings {
    pub vendor_api_url: Option<String>,
    pub genai_api_url: String,
    pub genai_model: String,
    pub cache_policy: CachePolicy,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any variable lookup. Blank values count as unset;
    /// unparsable numbers fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let max_entries = parse_or(get(CACHE_MAX_ENTRIES), CACHE_MAX_ENTRIES, DEFAULT_MAX_ENTRIES);
        let ttl_secs = parse_or(get(CACHE_TTL_SECS), CACHE_TTL_SECS, DEFAULT_TTL.as_secs());

        Self {
            vendor_api_url: get(VENDOR_API_URL),
            genai_api_url: get(GENAI_API_URL).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            genai_model: get(GENAI_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            cache_policy: CachePolicy {
                max_entries: Some(max_entries),
                ttl: Some(Duration::from_secs(ttl_secs)),
            },
        }
    }

    pub fn vendor_api_key() -> CredentialSource {
        CredentialSource::env(VENDOR_API_KEY)
    }

    pub fn genai_api_key() -> CredentialSource {
        CredentialSource::env(GENAI_API_KEY)
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, name: &str, default: T) -> T {
    match value {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(variable = name, value = %raw, "ignoring unparsable setting");
            default
        }),
        None => default,
    }
}
