//! Authentication service - exchanges credentials for a bearer token.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::Password;
use user_service_lib::UserRepository;

use crate::token::TokenIssuer;

/// Hash verified when the email is unknown, so both rejection paths cost
/// one Argon2 verification.
static DUMMY_PASSWORD: Lazy<Option<Password>> =
    Lazy::new(|| Password::new("dummy-password-for-unknown-accounts").ok());

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed bearer token
    pub access_token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a token for the account
    async fn login(&self, email: &str, password: &str) -> AppResult<TokenResponse>;
}

/// Concrete implementation of AuthService over the user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenIssuer>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenIssuer>) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: &str, password: &str) -> AppResult<TokenResponse> {
        let account = match self.users.find_by_email(email).await {
            Ok(user) => Some(user),
            Err(AppError::NotFound) => None,
            Err(e) => return Err(e),
        };

        // Unknown email and wrong password must look the same to the caller
        let user = match account {
            Some(user) if user.validate_password(password) => user,
            Some(_) => return Err(AppError::InvalidCredentials),
            None => {
                if let Some(dummy) = DUMMY_PASSWORD.as_ref() {
                    let _ = dummy.verify(password);
                }
                return Err(AppError::InvalidCredentials);
            }
        };

        let access_token = self.tokens.issue(user.id)?;
        tracing::info!(user_id = %user.id, "Token issued");

        Ok(TokenResponse { access_token })
    }
}
