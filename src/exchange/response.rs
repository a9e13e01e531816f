//! Verbatim response capture and classification.

use crate::error::BearerFlowError;
use serde_json::{Map, Value};

/// A token-endpoint response captured verbatim before any parsing.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers in arrival order
    pub headers: Vec<(String, String)>,
    /// Body exactly as received
    pub body: String,
}

impl RawResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A granted access token plus the provider's full response object.
///
/// Only `access_token` has guaranteed meaning; everything else is
/// provider-defined and passed through opaquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrant {
    access_token: String,
    metadata: Map<String, Value>,
}

impl TokenGrant {
    /// The granted access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The `token_type` field, when present (commonly `Bearer`).
    pub fn token_type(&self) -> Option<&str> {
        self.metadata_str("token_type")
    }

    /// The `instance_url` field, when present.
    pub fn instance_url(&self) -> Option<&str> {
        self.metadata_str("instance_url")
    }

    /// The `scope` field, when present.
    pub fn scope(&self) -> Option<&str> {
        self.metadata_str("scope")
    }

    /// The full parsed response object.
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }
}

/// Classifies a captured response into a grant or a typed failure.
///
/// Pure function of the response, so it can be tested with injected
/// responses and no transport:
/// - body is not a JSON object → [`BearerFlowError::MalformedResponse`]
/// - 2xx object with `access_token` → [`TokenGrant`]
/// - anything else → [`BearerFlowError::Provider`] carrying the provider's
///   `error` / `error_description` fields when supplied
pub fn classify(raw: &RawResponse) -> Result<TokenGrant, BearerFlowError> {
    let object = serde_json::from_str::<Value>(&raw.body)
        .ok()
        .and_then(|value| value.as_object().cloned())
        .ok_or_else(|| BearerFlowError::MalformedResponse {
            status: raw.status,
            body: raw.body.clone(),
        })?;

    if raw.is_success() {
        if let Some(token) = object.get("access_token").and_then(Value::as_str) {
            return Ok(TokenGrant {
                access_token: token.to_string(),
                metadata: object,
            });
        }
    }

    Err(BearerFlowError::Provider {
        status: raw.status,
        code: object
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown_error")
            .to_string(),
        description: object
            .get("error_description")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}
