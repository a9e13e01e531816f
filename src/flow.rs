//! Build-then-exchange orchestration.

use crate::context::CredentialContext;
use crate::error::BearerFlowError;
use crate::exchange::{ExchangeRequest, TokenExchange, TokenExchangeClient};
use crate::jwt::{AssertionBuilder, AssertionSigner, Rs256Signer};
use chrono::Utc;
use std::time::Duration;
use tracing::info;

/// One credential context's bearer flow: sign an assertion, exchange it.
///
/// [`BearerFlow::authenticate`] takes `&mut self`, so at most one exchange
/// can be in flight per context; flows for different contexts are fully
/// independent. Dropping the returned future cancels the transport call, and
/// the assertion built for the abandoned attempt is gone with it.
pub struct BearerFlow<S = Rs256Signer> {
    context: CredentialContext,
    builder: AssertionBuilder<S>,
    client: TokenExchangeClient,
}

impl<S: AssertionSigner> BearerFlow<S> {
    /// Creates a flow with default exchange-client settings.
    ///
    /// # Errors
    ///
    /// Returns [`BearerFlowError::Config`] when the HTTP transport cannot be
    /// constructed.
    pub fn new(context: CredentialContext, signer: S) -> Result<Self, BearerFlowError> {
        Ok(Self {
            context,
            builder: AssertionBuilder::new(signer),
            client: TokenExchangeClient::new()?,
        })
    }

    /// Overrides the assertion validity window.
    #[must_use]
    pub fn with_validity(mut self, validity: Duration) -> Self {
        self.builder = self.builder.with_validity(validity);
        self
    }

    /// Substitutes a caller-configured HTTP transport.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.client = TokenExchangeClient::with_client(http);
        self
    }

    /// The credential context this flow authenticates.
    pub fn context(&self) -> &CredentialContext {
        &self.context
    }

    /// Signs a fresh assertion at the current time and exchanges it.
    ///
    /// Every call signs anew; assertions are never reused across attempts.
    pub async fn authenticate(&mut self) -> Result<TokenExchange, BearerFlowError> {
        let assertion = self.builder.build_assertion(&self.context, Utc::now())?;
        let request = ExchangeRequest::new(self.context.token_endpoint().clone(), assertion);

        info!(endpoint = %request.endpoint(), "exchanging bearer assertion");
        self.client.exchange(request).await
    }
}
