use crewdesk_auth::{AccessClaims, Authority};

/// Principal context for a request (authenticated identity + authorities).
///
/// Inserted by the auth middleware after token verification; immutable for
/// the rest of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    username: String,
    authorities: Vec<Authority>,
}

impl PrincipalContext {
    pub fn new(username: String, authorities: Vec<Authority>) -> Self {
        Self {
            username,
            authorities,
        }
    }

    /// Derive the context from verified claims (splitting the canonical
    /// comma-joined authorities value).
    pub fn from_claims(claims: &AccessClaims) -> Self {
        let authorities = if claims.authorities.is_empty() {
            Vec::new()
        } else {
            claims
                .authorities
                .split(',')
                .map(|a| Authority::new(a.to_string()))
                .collect()
        };

        Self::new(claims.username.clone(), authorities)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn authorities(&self) -> &[Authority] {
        &self.authorities
    }

    pub fn has_authority(&self, label: &str) -> bool {
        self.authorities.iter().any(|a| a.as_str() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_canonical_authorities() {
        let claims = AccessClaims {
            iss: "crewdesk".to_string(),
            iat: 0,
            exp: 1,
            username: "alice".to_string(),
            authorities: "ADMIN,OPERATOR".to_string(),
        };

        let ctx = PrincipalContext::from_claims(&claims);
        assert_eq!(ctx.username(), "alice");
        assert!(ctx.has_authority("ADMIN"));
        assert!(ctx.has_authority("OPERATOR"));
        assert!(!ctx.has_authority("LEADER"));
    }

    #[test]
    fn empty_authorities_claim_means_no_grants() {
        let claims = AccessClaims {
            iss: "crewdesk".to_string(),
            iat: 0,
            exp: 1,
            username: "alice".to_string(),
            authorities: String::new(),
        };

        let ctx = PrincipalContext::from_claims(&claims);
        assert!(ctx.authorities().is_empty());
    }
}
