//! Password hashing with Argon2id.
//!
//! Both regular users and admin operators store PHC-format argon2 hashes;
//! plaintext passwords never reach the database. The PHC string carries its
//! own salt and parameters, so verification needs no extra configuration.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::AppError;

/// Hash a password into a PHC-format string.
///
/// A fresh random salt is generated per call, so hashing the same password
/// twice yields different strings.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::PasswordHash(e.to_string()))
}

/// Verify a password against a stored PHC-format hash.
///
/// Returns `Ok(false)` on a plain mismatch; any other failure (for example
/// a malformed stored hash) is an internal error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AppError::PasswordHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::PasswordHash(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_against_original_plaintext() {
        let hash = hash_password("hunter2!").unwrap();
        assert!(verify_password("hunter2!", &hash).unwrap());
    }

    #[test]
    fn hash_never_equals_the_plaintext() {
        let hash = hash_password("hunter2!").unwrap();
        assert_ne!(hash, "hunter2!");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let hash = hash_password("correct").unwrap();
        assert!(!verify_password("incorrect", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently_each_time() {
        let first = hash_password("repeat").unwrap();
        let second = hash_password("repeat").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_stored_hash_is_an_internal_error() {
        let result = verify_password("anything", "not-a-phc-string");
        assert!(matches!(result, Err(AppError::PasswordHash(_))));
    }
}
