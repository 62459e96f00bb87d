//! One-way credential hashing.

use userd_core::{DomainError, DomainResult};

/// Salted adaptive one-way hashing of plaintext credentials.
///
/// `hash` draws a fresh random salt per call, so hashing the same plaintext
/// twice yields different outputs. `verify` recomputes with the salt
/// embedded in the stored value; the underlying primitive compares without
/// an early-exit timing leak.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> DomainResult<String>;
    fn verify(&self, plaintext: &str, hashed: &str) -> bool;
}

/// bcrypt-backed hasher.
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

    /// Lower the work factor. Intended for tests; production uses the
    /// default cost.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))
    }

    fn verify(&self, plaintext: &str, hashed: &str) -> bool {
        match bcrypt::verify(plaintext, hashed) {
            Ok(matches) => matches,
            Err(e) => {
                // Hashes are only ever self-produced; a parse failure here
                // means a corrupted record, never a user error.
                tracing::warn!("stored credential hash failed to parse: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> BcryptHasher {
        BcryptHasher::with_cost(4)
    }

    #[test]
    fn hash_is_never_the_plaintext() {
        let h = hasher();
        let hashed = h.hash("Secr3t!").unwrap();
        assert_ne!(hashed, "Secr3t!");
    }

    #[test]
    fn verify_accepts_the_original_plaintext() {
        let h = hasher();
        let hashed = h.hash("Secr3t!").unwrap();
        assert!(h.verify("Secr3t!", &hashed));
    }

    #[test]
    fn verify_rejects_a_different_plaintext() {
        let h = hasher();
        let hashed = h.hash("Secr3t!").unwrap();
        assert!(!h.verify("wrong", &hashed));
    }

    #[test]
    fn repeated_hashing_salts_differently() {
        let h = hasher();
        let a = h.hash("Secr3t!").unwrap();
        let b = h.hash("Secr3t!").unwrap();
        assert_ne!(a, b);
        assert!(h.verify("Secr3t!", &a));
        assert!(h.verify("Secr3t!", &b));
    }

    #[test]
    fn malformed_stored_hash_verifies_false() {
        let h = hasher();
        assert!(!h.verify("Secr3t!", "not-a-bcrypt-hash"));
    }
}
