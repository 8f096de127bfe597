//! Secret hashing with Argon2, verification for Argon2, bcrypt and legacy plain text

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Hash error: {0}")]
    HashError(String),
    #[error("Verification failed: {0}")]
    VerificationFailed(String),
}

/// How a stored secret is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretFormat {
    Argon2,
    Bcrypt,
    PlainText,
}

impl SecretFormat {
    pub fn detect(stored: &str) -> Self {
        if stored.starts_with("$argon2") {
            SecretFormat::Argon2
        } else if stored.starts_with("$2") {
            // $2a$, $2b$, $2y$
            SecretFormat::Bcrypt
        } else {
            SecretFormat::PlainText
        }
    }
}

pub struct SecretService;

impl SecretService {
    pub fn hash(secret: &str) -> Result<String, SecretError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| SecretError::HashError(e.to_string()))
    }

    /// Checks `candidate` against the stored value. Plain-text values are compared verbatim.
    pub fn verify(candidate: &str, stored: &str) -> Result<bool, SecretError> {
        let format = SecretFormat::detect(stored);
        debug!(?format, "verifying secret");

        match format {
            SecretFormat::Argon2 => {
                let parsed = PasswordHash::new(stored)
                    .map_err(|e| SecretError::HashError(e.to_string()))?;
                Ok(Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok())
            }
            SecretFormat::Bcrypt => bcrypt::verify(candidate, stored)
                .map_err(|e| SecretError::VerificationFailed(e.to_string())),
            SecretFormat::PlainText => Ok(candidate == stored),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(SecretFormat::detect("$argon2id$v=19$m=19456"), SecretFormat::Argon2);
        assert_eq!(SecretFormat::detect("$2b$04$abc"), SecretFormat::Bcrypt);
        assert_eq!(SecretFormat::detect("jane_doe"), SecretFormat::PlainText);
    }

    #[test]
    fn test_plain_text_is_verbatim() {
        assert!(SecretService::verify("jane_doe", "jane_doe").unwrap());
        assert!(!SecretService::verify("Jane_Doe", "jane_doe").unwrap());
        assert!(!SecretService::verify("jane_doe ", "jane_doe").unwrap());
    }

    #[test]
    fn test_argon2_hash_and_verify() {
        let hash = SecretService::hash("s3cret").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(SecretService::verify("s3cret", &hash).unwrap());
        assert!(!SecretService::verify("wrong", &hash).unwrap());
    }

    #[test]
    fn test_bcrypt_verify() {
        let hash = bcrypt::hash("s3cret", 4).unwrap();
        assert!(SecretService::verify("s3cret", &hash).unwrap());
        assert!(!SecretService::verify("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = SecretService::hash("same").unwrap();
        let b = SecretService::hash("same").unwrap();
        assert_ne!(a, b);
    }
}
