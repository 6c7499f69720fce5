//! Password hashing capability for wallet registration
//!
//! Injected into [`super::service::WalletService`] rather than held as
//! global state, so the hashing backend stays swappable and test-friendly.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Stateless Argon2 credential hasher
#[derive(Debug, Clone, Default)]
pub struct CredentialHasher;

impl CredentialHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a raw password into a PHC string suitable for storage
    pub fn hash(&self, raw_password: &str) -> Result<String, String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(raw_password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| format!("Hashing failed: {}", e))
    }

    /// Verify a raw password against a stored PHC string
    pub fn verify(&self, raw_password: &str, stored_hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(raw_password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hasher = CredentialHasher::new();
        let hash = hasher.hash("s3cret-password").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("s3cret-password", &hash));
        assert!(!hasher.verify("wrong-password", &hash));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let hasher = CredentialHasher::new();
        assert!(!hasher.verify("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = CredentialHasher::new();
        let a = hasher.hash("same-password").unwrap();
        let b = hasher.hash("same-password").unwrap();
        assert_ne!(a, b, "Each hash should use a fresh salt");
    }
}
