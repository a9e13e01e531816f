//! Assertion construction and signing for the JWT bearer grant.

pub mod assertion;
pub mod claims;
pub mod signer;

pub use assertion::{AssertionBuilder, SignedAssertion, DEFAULT_VALIDITY};
pub use claims::AssertionClaims;
pub use signer::{AssertionSigner, Rs256Signer};
