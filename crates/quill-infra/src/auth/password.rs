//! Argon2 password hashing.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use quill_core::ports::{AuthError, PasswordService};

/// Hashes passwords with Argon2id and a per-password random salt. Stored
/// hashes are self-describing PHC strings.
#[derive(Default)]
pub struct Argon2PasswordService;

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_the_right_password_and_no_other() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("correct horse battery").unwrap();
        assert!(service.verify("correct horse battery", &hash).unwrap());
        assert!(!service.verify("incorrect horse battery", &hash).unwrap());
    }

    #[test]
    fn salting_makes_every_hash_unique() {
        let service = Argon2PasswordService::new();

        let a = service.hash("same password").unwrap();
        let b = service.hash("same password").unwrap();
        assert_ne!(a, b);
        assert!(service.verify("same password", &b).unwrap());
    }

    #[test]
    fn a_mangled_hash_is_an_error_not_a_mismatch() {
        let service = Argon2PasswordService::new();

        let err = service.verify("anything", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AuthError::HashingError(_)));
    }
}
