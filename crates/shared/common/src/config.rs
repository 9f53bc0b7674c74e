//! Shared configuration structures.

use serde::{Deserialize, Serialize};

use domain::DEFAULT_JWT_EXPIRES_IN_SECONDS;

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServiceConfig {
    /// Full `host:port` bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Database configuration.
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://product_api.db?mode=rwc".to_string(),
        }
    }
}

/// JWT configuration for token signing.
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    #[serde(skip_serializing)]
    pub secret: String,
    /// Token lifetime in seconds
    pub expires_in_seconds: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expires_in_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            expires_in_seconds,
        }
    }

    /// Get JWT secret as bytes.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expires_in_seconds", &self.expires_in_seconds)
            .finish()
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expires_in_seconds: DEFAULT_JWT_EXPIRES_IN_SECONDS,
        }
    }
}
