//! Auth Service Library
//!
//! Credential verification and bearer-token handling. Accounts are read
//! through `user-service`'s repository; tokens are HS256 JWTs carrying only
//! a subject and an expiry.

pub mod service;
pub mod token;

pub use service::{AuthService, Authenticator, TokenResponse};
pub use token::{Claims, TokenIssuer};
