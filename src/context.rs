//! Immutable credential context for one identity-provider login.

use crate::error::BearerFlowError;
use url::Url;

/// Path of the OAuth token endpoint under the provider's login URL.
pub const TOKEN_ENDPOINT_PATH: &str = "/services/oauth2/token";

/// Identity parameters for the bearer flow, built once and never mutated.
///
/// Holds the principal to log in as (`subject`), the connected-app consumer
/// key (`issuer`), the provider login URL (`audience`), and the token
/// endpoint derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialContext {
    subject: String,
    issuer: String,
    audience: String,
    token_endpoint: Url,
}

impl CredentialContext {
    /// Builds a context, validating the identity parameters.
    ///
    /// The audience must be a URL with a scheme; the token endpoint is
    /// derived as `{audience}/services/oauth2/token`. The `aud` claim keeps
    /// the audience string exactly as supplied.
    ///
    /// # Errors
    ///
    /// Returns [`BearerFlowError::ClaimsInvalid`] when `subject` or `issuer`
    /// is empty, or when `audience` is not a usable base URL.
    pub fn new(
        subject: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, BearerFlowError> {
        let subject = subject.into();
        let issuer = issuer.into();
        let audience = audience.into();

        let mut fields = Vec::new();
        if subject.trim().is_empty() {
            fields.push("sub".to_string());
        }
        if issuer.trim().is_empty() {
            fields.push("iss".to_string());
        }

        let joined = Url::parse(&audience).map(|base| base.join(TOKEN_ENDPOINT_PATH));
        let token_endpoint = match joined {
            Ok(Ok(url)) => url,
            _ => {
                fields.push("aud".to_string());
                return Err(BearerFlowError::ClaimsInvalid { fields });
            }
        };
        if !fields.is_empty() {
            return Err(BearerFlowError::ClaimsInvalid { fields });
        }

        Ok(Self {
            subject,
            issuer,
            audience,
            token_endpoint,
        })
    }

    /// Principal to log in as (the `sub` claim).
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Connected-app consumer key (the `iss` claim).
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Provider login URL (the `aud` claim), exactly as supplied.
    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// Token endpoint the assertion is exchanged at.
    pub fn token_endpoint(&self) -> &Url {
        &self.token_endpoint
    }
}
