//! Application state for dependency injection.

use std::sync::Arc;

use auth_service_lib::{AuthService, Authenticator, TokenIssuer};
use common::{AppResult, Database, JwtConfig};
use product_service_lib::{ProductManager, ProductService, ProductStore};
use user_service_lib::{UserManager, UserService, UserStore};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
    pub user_service: Arc<dyn UserService>,
    pub auth_service: Arc<dyn AuthService>,
    pub token_issuer: Arc<TokenIssuer>,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        product_service: Arc<dyn ProductService>,
        user_service: Arc<dyn UserService>,
        auth_service: Arc<dyn AuthService>,
        token_issuer: Arc<TokenIssuer>,
        database: Database,
    ) -> Self {
        Self {
            product_service,
            user_service,
            auth_service,
            token_issuer,
            database,
        }
    }

    /// Wire stores and services over one connection, creating missing
    /// tables on the way.
    pub async fn build(database: Database, jwt: &JwtConfig) -> AppResult<Self> {
        let product_store = Arc::new(ProductStore::new(database.get_connection()));
        let user_store = Arc::new(UserStore::new(database.get_connection()));
        product_store.init_schema().await?;
        user_store.init_schema().await?;

        let token_issuer = Arc::new(TokenIssuer::new(jwt));

        Ok(Self::new(
            Arc::new(ProductManager::new(product_store)),
            Arc::new(UserManager::new(user_store.clone())),
            Arc::new(Authenticator::new(user_store, token_issuer.clone())),
            token_issuer,
            database,
        ))
    }
}
