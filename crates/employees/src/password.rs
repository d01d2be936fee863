//! Password hashing boundary.

/// Default bcrypt work factor.
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Password hashing abstraction.
///
/// Algorithm choice belongs to the deployment, not the workflows; swap the
/// implementation without touching the directory service.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;
    fn verify(&self, password: &str, hash: &str) -> bool;
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(pub String);

/// bcrypt-backed hasher (the default implementation).
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Lower costs are useful in tests; production should keep the default.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordHashError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hasher = BcryptHasher::with_cost(4);
        let hash = hasher.hash("hunter2").unwrap();
        assert!(hasher.verify("hunter2", &hash));
        assert!(!hasher.verify("hunter3", &hash));
    }

    #[test]
    fn verify_tolerates_malformed_hashes() {
        let hasher = BcryptHasher::with_cost(4);
        assert!(!hasher.verify("hunter2", "not-a-bcrypt-hash"));
    }
}
