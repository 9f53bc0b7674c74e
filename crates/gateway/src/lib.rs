//! Product API Library
//!
//! HTTP surface for the product catalogue: routing, request validation,
//! bearer-token middleware and application wiring.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::time::Duration;

use sea_orm::ConnectOptions;
use tower_http::trace::TraceLayer;
use tracing::info;

use common::Database;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect to the database, prepare tables and serve HTTP until the
/// listener fails.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ConnectOptions::new(config.database.url.clone());
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let database = Database::connect(options).await?;
    let state = AppState::build(database, &config.jwt).await?;

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = config.service.addr().parse()?;
    info!("Product API listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
