//! HTTP handlers.

mod health_handler;
mod product_handler;
mod user_handler;

pub use health_handler::{health_check, health_routes};
pub use product_handler::{
    create_product, delete_product, get_product, list_products, product_routes, update_product,
    ProductRequest,
};
pub use user_handler::{create_user, generate_token, user_routes, CreateUserRequest, LoginRequest};
