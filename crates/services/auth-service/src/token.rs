//! Signed bearer tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::{AppError, AppResult, JwtConfig};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's ID
    pub sub: Uuid,
    /// Expiry as a Unix timestamp (seconds)
    pub exp: i64,
}

/// Issues and verifies tokens with a process-wide secret.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in_seconds: i64,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_bytes()),
            expires_in_seconds: config.expires_in_seconds,
        }
    }

    /// Claims for `subject`, expiring one lifetime from now.
    pub fn claims_for(&self, subject: Uuid) -> Claims {
        let expires_at = Utc::now() + Duration::seconds(self.expires_in_seconds);
        Claims {
            sub: subject,
            exp: expires_at.timestamp(),
        }
    }

    /// Sign a claim set.
    ///
    /// Signing failures are internal errors, not authentication failures.
    pub fn encode(&self, claims: &Claims) -> AppResult<String> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))
    }

    /// Sign a fresh token for `subject`.
    pub fn issue(&self, subject: Uuid) -> AppResult<String> {
        self.encode(&self.claims_for(subject))
    }

    /// Check signature and expiry, returning the claims.
    ///
    /// No clock leeway: a token is rejected as soon as `exp` has passed.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims)
    }
}
