//! Password verification against the configured bcrypt hash.
//!
//! Only the password half of the Basic credential pair is checked; the
//! username is accepted as-is. Verification delegates entirely to the
//! `bcrypt` crate, which performs the salted, constant-time comparison.
//! Neither the plaintext password nor the stored hash may ever be logged.

use crate::config::{ConfigError, PASSWORD_HASH_ENV};
use crate::error::AppError;

/// Verifies caller-supplied passwords against a bcrypt hash fixed at startup.
pub struct PasswordVerifier {
    hash: String,
}

impl PasswordVerifier {
    /// Build a verifier, rejecting hashes bcrypt cannot parse.
    ///
    /// A malformed hash would make every toggle fail with a 500 at request
    /// time; probing it once here turns that into a startup error instead.
    pub fn new(hash: String) -> Result<Self, ConfigError> {
        bcrypt::verify("", &hash).map_err(|_| ConfigError::InvalidPasswordHash(PASSWORD_HASH_ENV))?;
        Ok(Self { hash })
    }

    /// Check a plaintext password, returning `AuthFailed` on mismatch.
    pub fn verify(&self, password: &str) -> Result<(), AppError> {
        if bcrypt::verify(password, &self.hash)? {
            Ok(())
        } else {
            Err(AppError::AuthFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // DEFAULT_COST makes these tests take seconds; the minimum cost is fine
    // for exercising the comparison.
    fn verifier_for(password: &str) -> PasswordVerifier {
        PasswordVerifier::new(bcrypt::hash(password, 4).unwrap()).unwrap()
    }

    #[test]
    fn accepts_correct_password() {
        assert!(verifier_for("status1474!!").verify("status1474!!").is_ok());
    }

    #[test]
    fn rejects_wrong_password() {
        assert!(matches!(
            verifier_for("status1474!!").verify("letmein"),
            Err(AppError::AuthFailed)
        ));
    }

    #[test]
    fn rejects_empty_password_against_real_hash() {
        assert!(matches!(
            verifier_for("status1474!!").verify(""),
            Err(AppError::AuthFailed)
        ));
    }

    #[test]
    fn rejects_garbage_hash_at_construction() {
        assert!(matches!(
            PasswordVerifier::new("not-a-bcrypt-hash".to_string()),
            Err(ConfigError::InvalidPasswordHash(_))
        ));
    }
}
