//! Token claims model (transport-agnostic).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by an issued access token.
///
/// The wire form is fixed:
///
/// ```json
/// { "iss": "...", "iat": 0, "exp": 0, "username": "...", "authorities": "A,B" }
/// ```
///
/// `iat`/`exp` are epoch seconds; `authorities` is the canonicalized
/// comma-joined authority set (see [`crate::canonicalize`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Issuing system (fixed constant, see [`crate::ISSUER`]).
    pub iss: String,

    /// Issued-at, epoch seconds.
    pub iat: i64,

    /// Expiration, epoch seconds. Always strictly greater than `iat`.
    pub exp: i64,

    /// The authenticated principal's username.
    pub username: String,

    /// Comma-joined, deduplicated authority labels.
    pub authorities: String,
}

impl AccessClaims {
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Deterministically validate the claim time window.
///
/// Note: this validates the *claims* only. Signature verification lives in
/// [`crate::verify`]; callers supply `now` so clock handling stays testable.
pub fn validate_claims(claims: &AccessClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now.timestamp() < claims.iat {
        return Err(TokenValidationError::NotYetValid);
    }
    if now.timestamp() >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(iat: i64, exp: i64) -> AccessClaims {
        AccessClaims {
            iss: "crewdesk".to_string(),
            iat,
            exp,
            username: "alice".to_string(),
            authorities: "ADMIN".to_string(),
        }
    }

    #[test]
    fn wire_schema_is_exact() {
        let value = serde_json::to_value(claims(100, 200)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "iss": "crewdesk",
                "iat": 100,
                "exp": 200,
                "username": "alice",
                "authorities": "ADMIN",
            })
        );
    }

    #[test]
    fn valid_window_passes() {
        let now = DateTime::from_timestamp(150, 0).unwrap();
        assert!(validate_claims(&claims(100, 200), now).is_ok());
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = DateTime::from_timestamp(200, 0).unwrap();
        assert_eq!(
            validate_claims(&claims(100, 200), now),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn future_iat_is_rejected() {
        let now = DateTime::from_timestamp(50, 0).unwrap();
        assert_eq!(
            validate_claims(&claims(100, 200), now),
            Err(TokenValidationError::NotYetValid)
        );
    }

    #[test]
    fn inverted_window_is_rejected() {
        let now = DateTime::from_timestamp(150, 0).unwrap();
        assert_eq!(
            validate_claims(&claims(200, 100), now),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }
}
