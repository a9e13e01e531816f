//! The bearer-grant claim set.

use crate::context::CredentialContext;
use crate::error::BearerFlowError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The four claims of a bearer-flow assertion.
///
/// Constructed fresh for every assertion and discarded after signing. There
/// is deliberately no `iat`: the provider only validates `exp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssertionClaims {
    /// Principal to log in as
    pub sub: String,
    /// Connected-app consumer key
    pub iss: String,
    /// Provider login URL
    pub aud: String,
    /// Expiry as a Unix timestamp, `now + validity window`
    pub exp: i64,
}

impl AssertionClaims {
    /// Builds the claim set for one signing operation.
    ///
    /// # Errors
    ///
    /// Returns [`BearerFlowError::ClaimsInvalid`] when the validity window is
    /// zero, which would place `exp` at or before the signing time.
    pub fn for_context(
        context: &CredentialContext,
        now: DateTime<Utc>,
        validity: Duration,
    ) -> Result<Self, BearerFlowError> {
        if validity.is_zero() {
            return Err(BearerFlowError::ClaimsInvalid {
                fields: vec!["exp".to_string()],
            });
        }

        Ok(Self {
            sub: context.subject().to_string(),
            iss: context.issuer().to_string(),
            aud: context.audience().to_string(),
            exp: now.timestamp() + validity.as_secs() as i64,
        })
    }
}
