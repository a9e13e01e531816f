//! Exchange of a signed assertion for an access token.

pub mod client;
pub mod request;
pub mod response;

pub use client::{TokenExchange, TokenExchangeClient};
pub use request::ExchangeRequest;
pub use response::{RawResponse, TokenGrant};
