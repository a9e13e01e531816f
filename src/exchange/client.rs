//! HTTP client for the token exchange.

use crate::error::BearerFlowError;
use crate::exchange::request::ExchangeRequest;
use crate::exchange::response::{self, RawResponse, TokenGrant};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, instrument};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A completed exchange: the request, the verbatim response, and the grant.
///
/// Each piece is exposed separately so a caller can log or assert on the
/// exact wire traffic without the client logging any of it.
#[derive(Debug)]
pub struct TokenExchange {
    /// The request as sent
    pub request: ExchangeRequest,
    /// The response as received, before parsing
    pub response: RawResponse,
    /// The parsed grant
    pub grant: TokenGrant,
}

/// Exchanges signed assertions for access tokens over HTTP.
///
/// One POST per exchange; no retry, no redirect handling beyond the
/// transport default, no caching.
pub struct TokenExchangeClient {
    http: reqwest::Client,
}

impl TokenExchangeClient {
    /// Creates a client with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`BearerFlowError::Config`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new() -> Result<Self, BearerFlowError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| BearerFlowError::Config(format!("HTTP client: {e}")))?;
        Ok(Self { http })
    }

    /// Wraps a caller-configured transport.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Sends one token request and captures the response verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`BearerFlowError::Transport`] for DNS, connect, timeout, or
    /// body-read failures; no body is parsed on that path.
    #[instrument(skip_all, fields(endpoint = %request.endpoint()))]
    pub async fn send(&self, request: &ExchangeRequest) -> Result<RawResponse, BearerFlowError> {
        let response = self
            .http
            .post(request.endpoint().clone())
            .header(CONTENT_TYPE, request.content_type())
            .body(request.body().to_string())
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await?;

        debug!(status, "token endpoint responded");
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Sends the request and classifies the result.
    ///
    /// Consumes the request: a failed exchange cannot be replayed, a retry
    /// has to start from a freshly signed assertion.
    pub async fn exchange(
        &self,
        request: ExchangeRequest,
    ) -> Result<TokenExchange, BearerFlowError> {
        let raw = self.send(&request).await?;
        let grant = response::classify(&raw)?;
        Ok(TokenExchange {
            request,
            response: raw,
            grant,
        })
    }
}
