//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Products
// =============================================================================

/// Lowest accepted product price
pub const MIN_PRODUCT_PRICE: f64 = 0.0;

/// Sort keyword for oldest-first listings
pub const SORT_ASC: &str = "asc";

/// Sort keyword for newest-first listings
pub const SORT_DESC: &str = "desc";

// =============================================================================
// Authentication
// =============================================================================

/// Default token lifetime in seconds
pub const DEFAULT_JWT_EXPIRES_IN_SECONDS: i64 = 300;

/// Recommended minimum JWT secret length
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";
