//! Password value object.
//!
//! Wraps an Argon2id PHC string. Plaintext passwords only ever pass through
//! [`Password::new`] and [`Password::verify`]; they are never stored.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{DomainError, DomainResult};

/// Salted password digest.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plaintext password with a freshly generated salt.
    ///
    /// # Errors
    /// Returns a validation error if the password is empty, or an internal
    /// error if the hasher fails.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        if plain_text.is_empty() {
            return Err(DomainError::validation("Password is required"));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap an existing digest loaded from storage.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Digest string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the digest string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Check a plaintext candidate against this digest.
    ///
    /// A malformed digest never matches. The digest comparison inside
    /// `argon2` runs in constant time.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}
