//! OAuth 2.0 JWT bearer flow client.
//!
//! Obtains an access token from an identity provider without an interactive
//! login: a claim set identifying the connected app and user is signed with a
//! private RSA key, and the resulting assertion is exchanged for an access
//! token at the provider's token endpoint.
//!
//! # Flow
//! 1. [`AssertionBuilder`] signs a `{sub, iss, aud, exp}` claim set (RS256).
//! 2. [`TokenExchangeClient`] POSTs the assertion to the token endpoint.
//! 3. The response is classified into a [`TokenGrant`] or a typed error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod context;
pub mod error;
pub mod exchange;
pub mod flow;
pub mod jwt;

pub use config::Config;
pub use context::CredentialContext;
pub use error::BearerFlowError;
pub use exchange::{ExchangeRequest, RawResponse, TokenExchange, TokenExchangeClient, TokenGrant};
pub use flow::BearerFlow;
pub use jwt::{AssertionBuilder, AssertionClaims, AssertionSigner, Rs256Signer, SignedAssertion};
