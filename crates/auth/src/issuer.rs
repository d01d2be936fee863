//! Token issuance.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, Header};

use crewdesk_core::Username;

use crate::authority::{Authority, canonicalize};
use crate::claims::AccessClaims;
use crate::error::AuthError;
use crate::keys::SigningKey;

/// Fixed issuer constant embedded in every token.
pub const ISSUER: &str = "crewdesk";

/// Default token lifetime in milliseconds (~100 hours).
pub const DEFAULT_TTL_MS: i64 = 360_000_000;

/// An already-authenticated session: identity plus resolved authorities.
///
/// This is the input for the first issuance call shape, where a login flow
/// has already verified credentials and looked up the principal's grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub username: Username,
    pub authorities: Vec<Authority>,
}

/// Issues signed HS256 bearer tokens.
///
/// Issuance is a pure function of `(identity, authorities, now, key)`:
/// no I/O, no mutable state, deterministic output. `now` is supplied per
/// call — caching it across calls leaves every token sharing one stale
/// expiration for the life of the process.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    key: SigningKey,
    ttl: Duration,
    issuer: &'static str,
}

impl TokenIssuer {
    pub fn new(key: SigningKey) -> Self {
        Self::with_ttl(key, Duration::milliseconds(DEFAULT_TTL_MS))
    }

    pub fn with_ttl(key: SigningKey, ttl: Duration) -> Self {
        Self {
            key,
            ttl,
            issuer: ISSUER,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for an already-authenticated session (call shape a).
    pub fn issue_for_session(
        &self,
        session: &AuthenticatedSession,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        self.sign(
            session.username.as_str(),
            canonicalize(session.authorities.iter()),
            now,
        )
    }

    /// Issue a token from a raw username plus role labels (call shape b).
    ///
    /// The labels are canonicalized first; an empty collection is allowed
    /// here — rejecting zero-authority identities is the registration
    /// workflow's job, before it ever calls the issuer.
    pub fn issue<I, A>(&self, username: &str, authorities: I, now: DateTime<Utc>) -> Result<String, AuthError>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        self.sign(username, canonicalize(authorities), now)
    }

    /// Single signing funnel: both call shapes end up here.
    fn sign(&self, username: &str, authorities: String, now: DateTime<Utc>) -> Result<String, AuthError> {
        if username.trim().is_empty() {
            return Err(AuthError::InvalidIdentity);
        }

        let claims = AccessClaims {
            iss: self.issuer.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            username: username.to_string(),
            authorities,
        };

        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.key.encoding_key(),
        )
        .map_err(|e| AuthError::invalid_key(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::{Hs256TokenVerifier, TokenVerifier};

    fn test_key() -> SigningKey {
        SigningKey::from_bytes(vec![9u8; 32]).unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn issues_verifiable_token_with_exact_claims() {
        let issuer = TokenIssuer::new(test_key());
        let token = issuer
            .issue("alice", ["ADMIN"], fixed_now())
            .unwrap();

        let verifier = Hs256TokenVerifier::new(test_key());
        let claims = verifier.verify(&token, fixed_now()).unwrap();

        assert_eq!(claims.iss, ISSUER);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.authorities, "ADMIN");
    }

    #[test]
    fn window_equals_configured_ttl_exactly() {
        let ttl = Duration::milliseconds(DEFAULT_TTL_MS);
        let issuer = TokenIssuer::with_ttl(test_key(), ttl);
        let token = issuer.issue("alice", ["ADMIN"], fixed_now()).unwrap();

        let claims = Hs256TokenVerifier::new(test_key())
            .verify(&token, fixed_now())
            .unwrap();

        assert!(claims.iat < claims.exp);
        assert_eq!(claims.exp - claims.iat, ttl.num_seconds());
    }

    #[test]
    fn empty_identity_is_rejected() {
        let issuer = TokenIssuer::new(test_key());
        let err = issuer.issue("", ["ADMIN"], fixed_now()).unwrap_err();
        assert_eq!(err, AuthError::InvalidIdentity);

        let err = issuer.issue("   ", ["ADMIN"], fixed_now()).unwrap_err();
        assert_eq!(err, AuthError::InvalidIdentity);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let issuer = TokenIssuer::new(test_key());
        let a = issuer.issue("alice", ["ADMIN", "LEADER"], fixed_now()).unwrap();
        let b = issuer.issue("alice", ["LEADER", "ADMIN", "ADMIN"], fixed_now()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn both_call_shapes_share_one_signing_routine() {
        let issuer = TokenIssuer::new(test_key());

        let session = AuthenticatedSession {
            username: Username::new("bob").unwrap(),
            authorities: vec![Authority::new("OPERATOR"), Authority::new("ADMIN")],
        };

        let from_session = issuer.issue_for_session(&session, fixed_now()).unwrap();
        let from_roles = issuer
            .issue("bob", ["ADMIN", "OPERATOR"], fixed_now())
            .unwrap();

        assert_eq!(from_session, from_roles);
    }

    #[test]
    fn empty_authority_set_is_issuable() {
        // Policy enforcement (reject zero-role identities) is the caller's job.
        let issuer = TokenIssuer::new(test_key());
        let none: [&str; 0] = [];
        let token = issuer.issue("carol", none, fixed_now()).unwrap();

        let claims = Hs256TokenVerifier::new(test_key())
            .verify(&token, fixed_now())
            .unwrap();
        assert_eq!(claims.authorities, "");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::BTreeSet;

        proptest! {
            /// Property: issue → verify recovers the identity and the exact
            /// authority set (as a set, ignoring order).
            #[test]
            fn round_trip_recovers_identity_and_authorities(
                username in "[a-z][a-z0-9_]{0,15}",
                labels in proptest::collection::vec("[A-Z_]{1,10}", 0..6)
            ) {
                let issuer = TokenIssuer::new(test_key());
                let token = issuer.issue(&username, labels.iter(), fixed_now()).unwrap();

                let claims = Hs256TokenVerifier::new(test_key())
                    .verify(&token, fixed_now())
                    .unwrap();

                prop_assert_eq!(&claims.username, &username);

                let expected: BTreeSet<&str> = labels.iter().map(String::as_str).collect();
                let recovered: BTreeSet<&str> = if claims.authorities.is_empty() {
                    BTreeSet::new()
                } else {
                    claims.authorities.split(',').collect()
                };
                prop_assert_eq!(recovered, expected);
            }
        }
    }
}
