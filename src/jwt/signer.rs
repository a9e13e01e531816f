//! Assertion signing traits and implementations.

use crate::error::BearerFlowError;
use crate::jwt::assertion::SignedAssertion;
use crate::jwt::claims::AssertionClaims;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

/// Signs a claim set into a compact JWT assertion.
///
/// The flow takes a signer by value so tests and alternate key stores can
/// substitute their own implementation.
pub trait AssertionSigner: Send + Sync {
    /// Serialize and sign the claim set, returning the compact assertion.
    fn sign(&self, claims: &AssertionClaims) -> Result<SignedAssertion, BearerFlowError>;

    /// Algorithm name placed in the JWT header.
    fn algorithm(&self) -> &'static str;
}

/// RS256 signer backed by an RSA private key in PEM encoding.
///
/// The key material is parsed once at construction and owned by the signer;
/// it is never exposed or logged.
pub struct Rs256Signer {
    key: EncodingKey,
}

impl Rs256Signer {
    /// Parses an RSA private key from PEM bytes (PKCS#1 or PKCS#8).
    ///
    /// # Errors
    ///
    /// Returns [`BearerFlowError::KeyRejected`] when the bytes are not a
    /// usable RSA private key.
    pub fn from_rsa_pem(pem: &[u8]) -> Result<Self, BearerFlowError> {
        let key = EncodingKey::from_rsa_pem(pem).map_err(|e| BearerFlowError::KeyRejected {
            reason: e.to_string(),
        })?;
        Ok(Self { key })
    }
}

impl AssertionSigner for Rs256Signer {
    fn sign(&self, claims: &AssertionClaims) -> Result<SignedAssertion, BearerFlowError> {
        // Header::new fills {"alg": "RS256", "typ": "JWT"}.
        let compact = encode(&Header::new(Algorithm::RS256), claims, &self.key)?;
        Ok(SignedAssertion::new(compact))
    }

    fn algorithm(&self) -> &'static str {
        "RS256"
    }
}
