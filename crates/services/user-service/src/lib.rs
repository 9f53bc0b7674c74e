//! User Service Library
//!
//! Account persistence and registration. Credential checks and token
//! issuance live in `auth-service`, which reads accounts through
//! [`UserRepository`].

pub mod repository;
pub mod service;

pub use repository::{UserRepository, UserStore};
pub use service::{UserManager, UserService};
