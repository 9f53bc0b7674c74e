//! Common utilities shared across the service crates.
//!
//! This crate provides:
//! - Unified error handling with HTTP response conversion
//! - Configuration structures
//! - Database connection handling (`database` feature)

pub mod config;
#[cfg(feature = "database")]
pub mod database;
pub mod error;

pub use config::*;
#[cfg(feature = "database")]
pub use database::{create_table, Database};
pub use error::{AppError, AppResult, OptionExt};
