//! Assertion builder and the single-use signed assertion value.

use crate::context::CredentialContext;
use crate::error::BearerFlowError;
use crate::jwt::claims::AssertionClaims;
use crate::jwt::signer::AssertionSigner;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Default assertion validity window.
///
/// Providers typically cap the accepted window at around five minutes; no
/// clock-skew leeway is added on top of this.
pub const DEFAULT_VALIDITY: Duration = Duration::from_secs(180);

/// A signed compact JWT assertion (`header.claims.signature`).
///
/// Deliberately not `Clone`: building the exchange request consumes the
/// assertion, so a retry is forced to sign a fresh one with a fresh `exp`.
#[derive(Debug)]
pub struct SignedAssertion {
    compact: String,
}

impl SignedAssertion {
    pub(crate) fn new(compact: String) -> Self {
        Self { compact }
    }

    /// The compact serialization, for inspection before sending.
    pub fn as_str(&self) -> &str {
        &self.compact
    }
}

/// Produces signed bearer-grant assertions for a credential context.
pub struct AssertionBuilder<S> {
    signer: S,
    validity: Duration,
}

impl<S: AssertionSigner> AssertionBuilder<S> {
    /// Creates a builder with the default validity window.
    pub fn new(signer: S) -> Self {
        Self {
            signer,
            validity: DEFAULT_VALIDITY,
        }
    }

    /// Overrides the validity window.
    #[must_use]
    pub fn with_validity(mut self, validity: Duration) -> Self {
        self.validity = validity;
        self
    }

    /// The configured validity window.
    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Builds and signs one assertion for the given signing time.
    ///
    /// Deterministic given `now`; never retries. Two calls with different
    /// `now` values produce different assertions (distinct `exp`).
    ///
    /// # Errors
    ///
    /// Returns [`BearerFlowError::ClaimsInvalid`] for an unusable claim set
    /// and [`BearerFlowError::KeyRejected`] when signing fails.
    pub fn build_assertion(
        &self,
        context: &CredentialContext,
        now: DateTime<Utc>,
    ) -> Result<SignedAssertion, BearerFlowError> {
        let claims = AssertionClaims::for_context(context, now, self.validity)?;
        self.signer.sign(&claims)
    }
}
