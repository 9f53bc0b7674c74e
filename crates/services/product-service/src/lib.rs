//! Product Service Library
//!
//! Product catalogue persistence and use cases: creation, lookup, paginated
//! listing, full replacement and deletion.

pub mod repository;
pub mod service;

pub use repository::{ProductRepository, ProductStore};
pub use service::{ProductManager, ProductService};
