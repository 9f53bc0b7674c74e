//! API server configuration.

use std::env;

use common::{AppError, AppResult, DatabaseConfig, JwtConfig, ServiceConfig};
use domain::{DEFAULT_JWT_EXPIRES_IN_SECONDS, MIN_JWT_SECRET_LENGTH};

/// Everything the server needs at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Fails when `JWT_SECRET` is missing or empty, `JWT_EXPIRES_IN` is not a
    /// positive number of seconds, or `API_PORT` is not a valid port.
    pub fn from_env() -> AppResult<Self> {
        let defaults = ServiceConfig::default();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_default();
        if jwt_secret.is_empty() {
            return Err(AppError::internal("JWT_SECRET must be set"));
        }
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            tracing::warn!(
                "JWT_SECRET is shorter than {} characters",
                MIN_JWT_SECRET_LENGTH
            );
        }

        Ok(Self {
            service: ServiceConfig {
                host: env::var("API_HOST").unwrap_or(defaults.host),
                port: parse_port(env::var("API_PORT").ok().as_deref(), defaults.port)?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| DatabaseConfig::default().url),
            },
            jwt: JwtConfig::new(
                jwt_secret,
                parse_expires_in(env::var("JWT_EXPIRES_IN").ok().as_deref())?,
            ),
        })
    }
}

/// `API_PORT`: unset means the default, anything set must be a port number.
fn parse_port(raw: Option<&str>, default: u16) -> AppResult<u16> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::internal("API_PORT must be a port number")),
        None => Ok(default),
    }
}

/// `JWT_EXPIRES_IN`: unset means the default, anything set must be positive.
fn parse_expires_in(raw: Option<&str>) -> AppResult<i64> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|seconds| *seconds > 0)
            .ok_or_else(|| AppError::internal("JWT_EXPIRES_IN must be a positive integer")),
        None => Ok(DEFAULT_JWT_EXPIRES_IN_SECONDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_default_and_override() {
        assert_eq!(parse_port(None, 8000).unwrap(), 8000);
        assert_eq!(parse_port(Some("9000"), 8000).unwrap(), 9000);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(matches!(
            parse_port(Some("eighty"), 8000),
            Err(AppError::Internal(_))
        ));
        assert!(parse_port(Some("70000"), 8000).is_err());
        assert!(parse_port(Some(""), 8000).is_err());
    }

    #[test]
    fn test_expires_in() {
        assert_eq!(
            parse_expires_in(None).unwrap(),
            DEFAULT_JWT_EXPIRES_IN_SECONDS
        );
        assert_eq!(parse_expires_in(Some("60")).unwrap(), 60);
        assert!(parse_expires_in(Some("0")).is_err());
        assert!(parse_expires_in(Some("-5")).is_err());
        assert!(parse_expires_in(Some("soon")).is_err());
    }
}
