//! Environment-based configuration for the CLI.
//!
//! The core library accepts already-validated values; only the binary loads
//! configuration, from environment variables (with `.env` support).

use crate::error::BearerFlowError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default provider login URL.
pub const DEFAULT_LOGIN_URL: &str = "https://login.salesforce.com";

/// Login parameters for one bearer-flow invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Principal to log in as (`SF_USERNAME`)
    pub subject: String,
    /// Connected-app consumer key (`SF_CONSUMER_KEY`)
    pub issuer: String,
    /// Provider login URL (`SF_LOGIN_URL`)
    pub audience: String,
    /// Path to the RSA private key PEM file (`SF_KEY_FILE`)
    pub key_file: PathBuf,
    /// Assertion validity window (`ASSERTION_TTL_SECS`, default 180)
    pub assertion_ttl: Duration,
    /// HTTP request timeout (`HTTP_TIMEOUT_SECS`, default 30)
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, BearerFlowError> {
        dotenvy::dotenv().ok();

        let subject = require_env("SF_USERNAME")?;
        let issuer = require_env("SF_CONSUMER_KEY")?;
        let audience =
            env::var("SF_LOGIN_URL").unwrap_or_else(|_| DEFAULT_LOGIN_URL.to_string());
        let key_file = PathBuf::from(require_env("SF_KEY_FILE")?);
        let assertion_ttl = Duration::from_secs(parse_env("ASSERTION_TTL_SECS", 180)?);
        let http_timeout = Duration::from_secs(parse_env("HTTP_TIMEOUT_SECS", 30)?);

        Ok(Self {
            subject,
            issuer,
            audience,
            key_file,
            assertion_ttl,
            http_timeout,
        })
    }
}

/// Read a required environment variable.
fn require_env(name: &str) -> Result<String, BearerFlowError> {
    env::var(name).map_err(|_| BearerFlowError::Config(format!("{name} is required")))
}

/// Parse environment variable with default value.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, BearerFlowError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| BearerFlowError::Config(format!("Invalid {name}: {e}"))),
        Err(_) => Ok(default),
    }
}
