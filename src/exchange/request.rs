//! Construction of the token-endpoint request.

use crate::jwt::assertion::SignedAssertion;
use url::form_urlencoded;
use url::Url;

/// Grant type identifying the JWT bearer flow.
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Content type of the token request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// One fully-formed token request: endpoint plus url-encoded form body.
///
/// Consumes the [`SignedAssertion`] at construction and is itself consumed by
/// the exchange, so neither can be sent twice. The exact wire body is
/// inspectable via [`ExchangeRequest::body`] before sending.
#[derive(Debug)]
pub struct ExchangeRequest {
    endpoint: Url,
    body: String,
}

impl ExchangeRequest {
    /// Encodes the bearer-grant form body for `endpoint`.
    pub fn new(endpoint: Url, assertion: SignedAssertion) -> Self {
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", JWT_BEARER_GRANT_TYPE)
            .append_pair("assertion", assertion.as_str())
            .finish();

        Self { endpoint, body }
    }

    /// Endpoint the request will be POSTed to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Content type sent with the body.
    pub fn content_type(&self) -> &'static str {
        FORM_CONTENT_TYPE
    }

    /// The url-encoded form body, byte-for-byte as sent.
    pub fn body(&self) -> &str {
        &self.body
    }
}
