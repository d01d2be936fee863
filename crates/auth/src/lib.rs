//! `crewdesk-auth` — pure token issuance/verification boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage. Given an
//! identity and a set of authority labels it produces a signed HS256 bearer
//! token; the verifier side exists so resource servers (and tests) can check
//! the same contract with the shared key.

pub mod authority;
pub mod claims;
pub mod error;
pub mod issuer;
pub mod keys;
pub mod verify;

pub use authority::{Authority, canonicalize};
pub use claims::{AccessClaims, TokenValidationError, validate_claims};
pub use error::AuthError;
pub use issuer::{AuthenticatedSession, DEFAULT_TTL_MS, ISSUER, TokenIssuer};
pub use keys::SigningKey;
pub use verify::{Hs256TokenVerifier, TokenVerifier};
