//! Product repository tests against an in-memory SQLite database.

use std::sync::Arc;

use chrono::{Duration, Utc};
use sea_orm::ConnectOptions;
use uuid::Uuid;

use common::{AppError, Database};
use domain::{PageRequest, Product, SortOrder};
use product_service_lib::{ProductManager, ProductRepository, ProductService, ProductStore};

async fn setup_store() -> ProductStore {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options).await.expect("in-memory database");
    let store = ProductStore::new(db.get_connection());
    store.init_schema().await.expect("products table");
    store
}

async fn seed_products(store: &ProductStore, count: usize) {
    for i in 1..=count {
        let product = Product::new(&format!("Product {}", i), i as f64 * 1.5).unwrap();
        store.create(&product).await.unwrap();
    }
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn test_create_new_product() {
    let store = setup_store().await;
    let product = Product::new("Product 1", 10.5).unwrap();

    store.create(&product).await.unwrap();

    let found = store.find_by_id(product.id).await.unwrap();
    assert_eq!(found.id, product.id);
    assert_eq!(found.name, "Product 1");
    assert_eq!(found.price, 10.5);
}

#[tokio::test]
async fn test_create_duplicate_id_is_storage_error() {
    let store = setup_store().await;
    let product = Product::new("Product 1", 10.5).unwrap();

    store.create(&product).await.unwrap();
    let result = store.create(&product).await;

    assert!(matches!(result, Err(AppError::Database(_))));
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let store = setup_store().await;

    let result = store.find_by_id(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_find_all_products_paginated() {
    let store = setup_store().await;
    seed_products(&store, 23).await;

    let page = store
        .find_all(PageRequest::new(1, 10), SortOrder::Asc)
        .await
        .unwrap();
    assert_eq!(page.len(), 10);
    assert_eq!(page[0].name, "Product 1");
    assert_eq!(page[9].name, "Product 10");

    let page = store
        .find_all(PageRequest::new(2, 10), SortOrder::Asc)
        .await
        .unwrap();
    assert_eq!(page.len(), 10);
    assert_eq!(page[0].name, "Product 11");
    assert_eq!(page[9].name, "Product 20");

    let page = store
        .find_all(PageRequest::new(3, 10), SortOrder::Asc)
        .await
        .unwrap();
    assert_eq!(names(&page), vec!["Product 21", "Product 22", "Product 23"]);

    let page = store
        .find_all(PageRequest::new(1, 24), SortOrder::Desc)
        .await
        .unwrap();
    assert_eq!(page.len(), 23);
    assert_eq!(page[0].name, "Product 23");
    assert_eq!(page[22].name, "Product 1");
}

#[tokio::test]
async fn test_equal_timestamps_keep_insertion_order() {
    let store = setup_store().await;
    let created_at = Utc::now();
    for i in 1..=5 {
        let mut product = Product::new(&format!("Product {}", i), 1.0).unwrap();
        product.created_at = created_at;
        store.create(&product).await.unwrap();
    }
    let mut newest = Product::new("Newest", 1.0).unwrap();
    newest.created_at = created_at + Duration::seconds(1);
    store.create(&newest).await.unwrap();

    let asc = store
        .find_all(PageRequest::default(), SortOrder::Asc)
        .await
        .unwrap();
    assert_eq!(
        names(&asc),
        vec!["Product 1", "Product 2", "Product 3", "Product 4", "Product 5", "Newest"]
    );

    let desc = store
        .find_all(PageRequest::default(), SortOrder::Desc)
        .await
        .unwrap();
    assert_eq!(
        names(&desc),
        vec!["Newest", "Product 1", "Product 2", "Product 3", "Product 4", "Product 5"]
    );

    let page = store
        .find_all(PageRequest::new(2, 2), SortOrder::Asc)
        .await
        .unwrap();
    assert_eq!(names(&page), vec!["Product 3", "Product 4"]);
}

#[tokio::test]
async fn test_update_keeps_listing_position() {
    let store = setup_store().await;
    seed_products(&store, 3).await;
    let first = store
        .find_all(PageRequest::default(), SortOrder::Asc)
        .await
        .unwrap()
        .remove(0);

    store
        .update(&first.revise("Renamed", 2.0).unwrap())
        .await
        .unwrap();

    let all = store
        .find_all(PageRequest::default(), SortOrder::Asc)
        .await
        .unwrap();
    assert_eq!(names(&all), vec!["Renamed", "Product 2", "Product 3"]);
}

#[tokio::test]
async fn test_find_all_without_pagination_returns_everything() {
    let store = setup_store().await;
    seed_products(&store, 12).await;

    let all = store
        .find_all(PageRequest::new(0, 10), SortOrder::Asc)
        .await
        .unwrap();
    assert_eq!(all.len(), 12);
    assert_eq!(all[0].name, "Product 1");

    let all = store
        .find_all(PageRequest::new(3, 0), SortOrder::Desc)
        .await
        .unwrap();
    assert_eq!(all.len(), 12);
    assert_eq!(all[0].name, "Product 12");
}

#[tokio::test]
async fn test_find_all_past_the_end_is_empty() {
    let store = setup_store().await;
    seed_products(&store, 5).await;

    let page = store
        .find_all(PageRequest::new(4, 10), SortOrder::Asc)
        .await
        .unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_find_all_on_empty_store() {
    let store = setup_store().await;

    let all = store
        .find_all(PageRequest::default(), SortOrder::Asc)
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_unknown_sort_behaves_as_asc() {
    let store = Arc::new(setup_store().await);
    seed_products(&store, 7).await;
    let service = ProductManager::new(store.clone());

    let asc = service.list_products(1, 5, "asc").await.unwrap();
    let unknown = service.list_products(1, 5, "newest").await.unwrap();
    let empty = service.list_products(1, 5, "").await.unwrap();

    assert_eq!(names(&asc), names(&unknown));
    assert_eq!(names(&asc), names(&empty));
    assert_eq!(asc[0].name, "Product 1");
}

#[tokio::test]
async fn test_update_product() {
    let store = setup_store().await;
    let product = Product::new("Product 1", 10.5).unwrap();
    store.create(&product).await.unwrap();

    let replacement = product.revise("Product 2", 99.0).unwrap();
    store.update(&replacement).await.unwrap();

    let found = store.find_by_id(product.id).await.unwrap();
    assert_eq!(found.name, "Product 2");
    assert_eq!(found.price, 99.0);
}

#[tokio::test]
async fn test_update_missing_product_leaves_store_unchanged() {
    let store = setup_store().await;
    seed_products(&store, 2).await;

    let stranger = Product::new("Ghost", 1.0).unwrap();
    let result = store.update(&stranger).await;
    assert!(matches!(result, Err(AppError::NotFound)));

    let all = store
        .find_all(PageRequest::default(), SortOrder::Asc)
        .await
        .unwrap();
    assert_eq!(names(&all), vec!["Product 1", "Product 2"]);
}

#[tokio::test]
async fn test_delete_product() {
    let store = setup_store().await;
    let product = Product::new("Product 1", 10.5).unwrap();
    store.create(&product).await.unwrap();

    store.delete(product.id).await.unwrap();

    let result = store.find_by_id(product.id).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_missing_product() {
    let store = setup_store().await;

    let result = store.delete(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}
