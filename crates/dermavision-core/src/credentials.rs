//! API key sources.
//!
//! Keys are resolved on every call rather than captured at startup, so a
//! rotated or newly provided environment variable takes effect without a
//! restart. An unset or blank key is reported as absent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline { value: String },
    Env { var: String },
    Missing,
}

impl CredentialSource {
    pub fn env(var: impl Into<String>) -> Self {
        CredentialSource::Env { var: var.into() }
    }

    pub fn inline(value: impl Into<String>) -> Self {
        CredentialSource::Inline {
            value: value.into(),
        }
    }

    /// Current key value, or `None` when unset or blank.
    pub fn resolve(&self) -> Option<String> {
        let value = match self {
            CredentialSource::Inline { value } => value.clone(),
            CredentialSource::Env { var } => std::env::var(var).ok()?,
            CredentialSource::Missing => return None,
        };
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn is_configured(&self) -> bool {
        self.resolve().is_some()
    }

    /// Like [`resolve`](Self::resolve), but names the missing key in the error.
    pub fn require(&self, what: &str) -> Result<String, CoreError> {
        self.resolve()
            .ok_or_else(|| CoreError::MissingCredential(what.to_string()))
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Inline { .. } => f.write_str("Inline(<redacted>)"),
            CredentialSource::Env { var } => write!(f, "Env({var})"),
            CredentialSource::Missing => f.write_str("Missing"),
        }
    }
}
