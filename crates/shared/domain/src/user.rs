//! User domain entity.

use serde::Serialize;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::password::Password;

/// User domain entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Create a new user, hashing the plaintext password.
    ///
    /// # Errors
    /// Returns a validation error if any argument is empty.
    pub fn new(name: &str, email: &str, password: &str) -> DomainResult<Self> {
        if name.is_empty() {
            return Err(DomainError::validation("Name is required"));
        }
        if email.is_empty() {
            return Err(DomainError::validation("Email is required"));
        }

        let password_hash = Password::new(password)?.into_string();

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        })
    }

    /// Check a login candidate against the stored hash.
    pub fn validate_password(&self, candidate: &str) -> bool {
        Password::from_hash(self.password_hash.as_str()).verify(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new("John Doe", "email@email.com", "123456").unwrap();

        assert!(!user.id.is_nil());
        assert!(!user.password_hash.is_empty());
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "email@email.com");
    }

    #[test]
    fn test_validate_password() {
        let user = User::new("John Doe", "email@email.com", "123456").unwrap();

        assert!(user.validate_password("123456"));
        assert!(!user.validate_password("123"));
        assert_ne!(user.password_hash, "123456");
    }

    #[test]
    fn test_new_user_rejects_empty_fields() {
        assert!(matches!(
            User::new("", "email@email.com", "123456"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            User::new("John Doe", "", "123456"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            User::new("John Doe", "email@email.com", ""),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User::new("John Doe", "email@email.com", "123456").unwrap();
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "email@email.com");
    }
}
