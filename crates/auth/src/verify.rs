//! Token verification (the resource-server side of the contract).

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, Validation};

use crate::claims::{AccessClaims, validate_claims};
use crate::error::AuthError;
use crate::issuer::ISSUER;
use crate::keys::SigningKey;

/// Verifies bearer tokens and returns their claims.
///
/// Object-safe so HTTP middleware can hold it as `Arc<dyn TokenVerifier>`.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, AuthError>;
}

/// HMAC-SHA256 verifier using the shared signing key.
#[derive(Debug, Clone)]
pub struct Hs256TokenVerifier {
    key: SigningKey,
    validation: Validation,
}

impl Hs256TokenVerifier {
    pub fn new(key: SigningKey) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        // Time-window checks run against the caller-supplied `now` in
        // `validate_claims`, not the library's wall clock.
        validation.validate_exp = false;

        Self { key, validation }
    }
}

impl TokenVerifier for Hs256TokenVerifier {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, AuthError> {
        let data = jsonwebtoken::decode::<AccessClaims>(
            token,
            &self.key.decoding_key(),
            &self.validation,
        )
        .map_err(|e| AuthError::invalid_token(e.to_string()))?;

        validate_claims(&data.claims, now).map_err(|e| AuthError::invalid_token(e.to_string()))?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issuer::TokenIssuer;
    use chrono::Duration;

    fn key(fill: u8) -> SigningKey {
        SigningKey::from_bytes(vec![fill; 32]).unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn rejects_token_signed_with_a_different_key() {
        let token = TokenIssuer::new(key(1))
            .issue("alice", ["ADMIN"], fixed_now())
            .unwrap();

        let err = Hs256TokenVerifier::new(key(2))
            .verify(&token, fixed_now())
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken { .. }));
    }

    #[test]
    fn rejects_expired_token() {
        let issuer = TokenIssuer::with_ttl(key(1), Duration::seconds(60));
        let token = issuer.issue("alice", ["ADMIN"], fixed_now()).unwrap();

        let later = fixed_now() + Duration::seconds(61);
        let err = Hs256TokenVerifier::new(key(1))
            .verify(&token, later)
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken { .. }));
    }

    #[test]
    fn rejects_garbage_token() {
        let err = Hs256TokenVerifier::new(key(1))
            .verify("not.a.token", fixed_now())
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken { .. }));
    }

    #[test]
    fn accepts_token_within_its_window() {
        let issuer = TokenIssuer::with_ttl(key(1), Duration::seconds(60));
        let token = issuer.issue("alice", ["ADMIN"], fixed_now()).unwrap();

        let claims = Hs256TokenVerifier::new(key(1))
            .verify(&token, fixed_now() + Duration::seconds(30))
            .unwrap();
        assert_eq!(claims.username, "alice");
    }
}
