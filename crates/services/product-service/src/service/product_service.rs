//! Product service - product catalogue use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::AppResult;
use domain::{PageRequest, Product, SortOrder};

use crate::repository::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Validate and persist a new product
    async fn create_product(&self, name: &str, price: f64) -> AppResult<Product>;

    /// Get product by ID
    async fn get_product(&self, id: Uuid) -> AppResult<Product>;

    /// List products; `sort` is normalized, zero page or limit lists everything
    async fn list_products(&self, page: u64, limit: u64, sort: &str) -> AppResult<Vec<Product>>;

    /// Replace name and price of an existing product
    async fn update_product(&self, id: Uuid, name: &str, price: f64) -> AppResult<Product>;

    /// Delete product by ID
    async fn delete_product(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProductService using repository.
pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
}

impl ProductManager {
    /// Create new product service instance with repository
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn create_product(&self, name: &str, price: f64) -> AppResult<Product> {
        let product = Product::new(name, price)?;
        self.repo.create(&product).await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    async fn get_product(&self, id: Uuid) -> AppResult<Product> {
        self.repo.find_by_id(id).await
    }

    async fn list_products(&self, page: u64, limit: u64, sort: &str) -> AppResult<Vec<Product>> {
        self.repo
            .find_all(PageRequest::new(page, limit), SortOrder::parse(sort))
            .await
    }

    async fn update_product(&self, id: Uuid, name: &str, price: f64) -> AppResult<Product> {
        let current = self.repo.find_by_id(id).await?;
        let replacement = current.revise(name, price)?;
        self.repo.update(&replacement).await?;

        tracing::info!(product_id = %id, "Product updated");
        Ok(replacement)
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;

        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
