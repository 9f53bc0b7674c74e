//! Product handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use common::{AppError, AppResult};
use domain::Product;

use crate::extractors::ValidatedJson;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Product body for create and full replacement.
///
/// Other product fields in the body (`id`, `created_at`) are ignored; the
/// path decides which product an update targets.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

/// Listing query. Values that do not parse fall back to "no pagination".
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

impl ListProductsQuery {
    fn page(&self) -> u64 {
        parse_or_zero(self.page.as_deref())
    }

    fn limit(&self) -> u64 {
        parse_or_zero(self.limit.as_deref())
    }

    fn sort(&self) -> &str {
        self.sort.as_deref().unwrap_or_default()
    }
}

fn parse_or_zero(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::bad_request("Invalid product id"))
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Create a product; the new ID is returned in the `id` header
pub async fn create_product(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<(StatusCode, [(&'static str, String); 1])> {
    let product = state
        .product_service
        .create_product(&payload.name, payload.price)
        .await?;

    tracing::debug!(product_id = %product.id, created_by = %current_user.id, "Create product handled");
    Ok((StatusCode::CREATED, [("id", product.id.to_string())]))
}

/// Get product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_id(&id)?;
    let product = state.product_service.get_product(id).await?;
    Ok(Json(product))
}

/// List products, optionally paginated and sorted by creation time
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state
        .product_service
        .list_products(query.page(), query.limit(), query.sort())
        .await?;
    Ok(Json(products))
}

/// Replace a product
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    state
        .product_service
        .update_product(id, &payload.name, payload.price)
        .await?;
    Ok(StatusCode::OK)
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    state.product_service.delete_product(id).await?;
    Ok(StatusCode::OK)
}
