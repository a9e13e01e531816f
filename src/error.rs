//! Error types for the bearer flow.
//!
//! Each variant maps to a distinct failure stage, so callers can tell
//! "could not build the request" from "request sent but rejected" from
//! "request sent but the provider denied it".

use thiserror::Error;

/// Errors produced while building an assertion or exchanging it for a token.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BearerFlowError {
    /// Private key could not be parsed or does not fit the RS256 family.
    #[error("Private key rejected: {reason}")]
    KeyRejected {
        /// Description of why the key was unusable
        reason: String,
    },

    /// Required claim fields are missing or invalid.
    #[error("Required claims invalid: {fields:?}")]
    ClaimsInvalid {
        /// The offending claim fields (`sub`, `iss`, `aud`, `exp`)
        fields: Vec<String>,
    },

    /// The token endpoint could not be reached (DNS, connect, timeout).
    #[error("Token endpoint unreachable: {reason}")]
    Transport {
        /// Underlying transport error description
        reason: String,
    },

    /// A response arrived but its body was not parseable JSON.
    #[error("Token endpoint returned an unparsable body (status {status})")]
    MalformedResponse {
        /// HTTP status of the response
        status: u16,
        /// Raw body as received
        body: String,
    },

    /// The provider returned a well-formed error response.
    #[error("Provider rejected the grant (status {status}): {code}")]
    Provider {
        /// HTTP status of the response
        status: u16,
        /// Provider error code (e.g. `invalid_grant`)
        code: String,
        /// Provider error description, when supplied
        description: Option<String>,
    },

    /// Configuration error (missing or invalid caller-supplied settings).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<jsonwebtoken::errors::Error> for BearerFlowError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        BearerFlowError::KeyRejected {
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for BearerFlowError {
    fn from(err: reqwest::Error) -> Self {
        BearerFlowError::Transport {
            reason: err.to_string(),
        }
    }
}
