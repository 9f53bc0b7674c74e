//! Product repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, Order,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{PageRequest, Product, SortOrder};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Largest offset/limit handed to the backend (SQL integers are signed).
const MAX_WINDOW_VALUE: u64 = i64::MAX as u64;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product
    async fn create(&self, product: &Product) -> AppResult<()>;

    /// Find product by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Product>;

    /// List products ordered by creation time; equal timestamps keep
    /// insertion order in both directions.
    ///
    /// A disabled window returns the whole collection; a window past the end
    /// returns an empty list.
    async fn find_all(&self, page: PageRequest, sort: SortOrder) -> AppResult<Vec<Product>>;

    /// Replace every stored field of an existing product
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// Delete product by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the `products` table if it does not exist yet.
    pub async fn init_schema(&self) -> AppResult<()> {
        common::create_table(&self.db, ProductEntity)
            .await
            .map_err(AppError::from)
    }

    async fn find_model(&self, id: Uuid) -> AppResult<Option<product::Model>> {
        ProductEntity::find()
            .filter(product::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn create(&self, product: &Product) -> AppResult<()> {
        ActiveModel::from(product)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        tracing::debug!(product_id = %product.id, "Product stored");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Product> {
        self.find_model(id)
            .await?
            .map(Product::from)
            .ok_or_not_found()
    }

    async fn find_all(&self, page: PageRequest, sort: SortOrder) -> AppResult<Vec<Product>> {
        let order = match sort {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let mut query = ProductEntity::find()
            .order_by(product::Column::CreatedAt, order)
            .order_by(product::Column::Seq, Order::Asc);
        if let Some((offset, limit)) = page.window() {
            query = query
                .offset(offset.min(MAX_WINDOW_VALUE))
                .limit(limit.min(MAX_WINDOW_VALUE));
        }

        let models = query.all(&self.db).await.map_err(AppError::from)?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        // Read-then-write: not atomic against a concurrent delete
        let stored = self.find_model(product.id).await?.ok_or_not_found()?;

        let mut active: ActiveModel = stored.into();
        active.name = Set(product.name.clone());
        active.price = Set(product.price);
        active.created_at = Set(product.created_at);
        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let stored = self.find_model(id).await?.ok_or_not_found()?;

        stored.delete(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }
}
