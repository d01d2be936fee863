//! Authentication error model.

use thiserror::Error;

/// Errors raised by the token issuance/verification core.
///
/// These are deterministic failures: no retry is ever meaningful here. Retry
/// policy (if any) belongs to the caller's network layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The identity is empty or missing; issuance never proceeds.
    #[error("invalid identity: username cannot be empty")]
    InvalidIdentity,

    /// Key material could not be decoded or is too short for HMAC-SHA256.
    ///
    /// Fatal at startup: the process must not serve authentication requests
    /// without a valid key.
    #[error("invalid signing key: {reason}")]
    InvalidKey { reason: String },

    /// A presented token failed decoding, signature, or time-window checks.
    #[error("invalid token: {reason}")]
    InvalidToken { reason: String },
}

impl AuthError {
    pub fn invalid_key(reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            reason: reason.into(),
        }
    }

    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }
}
