//! Route configuration.

use axum::{middleware, Router};

use crate::handlers::{health_routes, product_routes, user_routes};
use crate::middleware::auth_middleware;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (no auth)
        .nest("/health", health_routes())
        // Account creation and token issuance (no auth)
        .nest("/users", user_routes())
        // Products (bearer token required)
        .nest(
            "/products",
            product_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .with_state(state)
}
