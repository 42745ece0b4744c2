use product_catalog::config::CatalogConfig;
use product_catalog::lifecycle::CatalogSystem;
use product_catalog::model::{PaginationQuery, ProductCreate, ProductUpdate};
use product_catalog::rpc::ClientError;
use std::collections::HashSet;

async fn start() -> CatalogSystem {
    CatalogSystem::start(&CatalogConfig::default())
        .await
        .expect("Failed to start catalog")
}

fn page(page: u32, limit: u32) -> PaginationQuery {
    PaginationQuery::new(page, limit).expect("non-zero pagination")
}

fn expect_bad_request(result: Result<impl std::fmt::Debug, ClientError>, message: &str) {
    let err = result.expect_err("Expected a failure");
    let rpc = err.rpc().expect("Expected an RPC error");
    assert_eq!(rpc.status, 400);
    assert_eq!(rpc.message, message);
}

/// Full walk through the catalog over SQLite and the RPC channel.
#[tokio::test]
async fn test_catalog_lifecycle_over_sqlite() {
    let system = start().await;
    let client = &system.client;

    for i in 1..=5 {
        let created = client
            .create_product(ProductCreate::new(format!("Product {i}"), f64::from(i) * 2.5))
            .await
            .expect("Failed to create product");
        assert_eq!(created.id, i64::from(i));
        assert!(created.available);

        let found = client
            .find_one_product(created.id)
            .await
            .expect("Failed to find product");
        assert_eq!(found, created);
    }

    let removed = client.remove_product(3).await.expect("Failed to remove");
    assert_eq!(removed.id, 3);
    assert!(!removed.available);

    let first = client.find_all_products(page(1, 2)).await.unwrap();
    let ids: Vec<i64> = first.data.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(first.meta.page, 1);
    assert_eq!(first.meta.total_pages, 4);
    assert_eq!(first.meta.last_page, 2);

    let second = client.find_all_products(page(2, 2)).await.unwrap();
    let ids: Vec<i64> = second.data.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![4, 5]);

    let beyond = client.find_all_products(page(3, 2)).await.unwrap();
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.meta.total_pages, 4);
    assert_eq!(beyond.meta.page, 3);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn test_removed_product_is_not_found() {
    let system = start().await;
    let client = &system.client;

    let product = client
        .create_product(ProductCreate::new("Short-lived", 5.0))
        .await
        .unwrap();
    client.remove_product(product.id).await.unwrap();

    let message = format!("Product with id {} not found", product.id);
    expect_bad_request(client.find_one_product(product.id).await, &message);
    expect_bad_request(client.remove_product(product.id).await, &message);
    expect_bad_request(
        client
            .update_product(product.id, ProductUpdate::default().name("Back"))
            .await,
        &message,
    );

    expect_bad_request(client.find_one_product(404).await, "Product with id 404 not found");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_changes_only_patched_fields() {
    let system = start().await;
    let client = &system.client;

    let product = client
        .create_product(ProductCreate::new("Chair", 45.0))
        .await
        .unwrap();

    let patch = ProductUpdate {
        id: Some(product.id + 10),
        name: Some("Office chair".into()),
        price: None,
    };
    let updated = client.update_product(product.id, patch).await.unwrap();
    assert_eq!(updated.id, product.id);
    assert_eq!(updated.name, "Office chair");
    assert_eq!(updated.price, 45.0);
    assert_eq!(updated.created_at, product.created_at);

    let found = client.find_one_product(product.id).await.unwrap();
    assert_eq!(found, updated);

    // The id from the patch must not have produced or touched another row.
    expect_bad_request(
        client.find_one_product(product.id + 10).await,
        &format!("Product with id {} not found", product.id + 10),
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_validate_products() {
    let system = start().await;
    let client = &system.client;

    let a = client.create_product(ProductCreate::new("A", 1.0)).await.unwrap();
    let b = client.create_product(ProductCreate::new("B", 2.0)).await.unwrap();
    client.remove_product(b.id).await.unwrap();

    let validated = client
        .validate_products(vec![a.id, a.id, b.id])
        .await
        .expect("Existing ids should validate");
    let ids: HashSet<i64> = validated.iter().map(|p| p.id).collect();
    assert_eq!(validated.len(), 2);
    assert_eq!(ids, HashSet::from([a.id, b.id]));

    expect_bad_request(
        client.validate_products(vec![a.id, 999]).await,
        "Some products are invalid",
    );

    system.shutdown().await.unwrap();
}

/// Requests from many tasks are served concurrently and each insert gets its own id.
#[tokio::test]
async fn test_concurrent_creates() {
    let system = start().await;

    let mut handles = vec![];
    for i in 0..20 {
        let client = system.client.clone();
        handles.push(tokio::spawn(async move {
            client
                .create_product(ProductCreate::new(format!("Bulk {i}"), 1.0))
                .await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let product = handle.await.unwrap().expect("Create failed");
        assert!(ids.insert(product.id), "Duplicate id {}", product.id);
    }
    assert_eq!(ids.len(), 20);

    let listed = system.client.find_all_products(page(1, 50)).await.unwrap();
    assert_eq!(listed.data.len(), 20);
    assert_eq!(listed.meta.last_page, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_payload_is_rejected() {
    let system = start().await;

    let err = system
        .client
        .create_product(ProductCreate::new("Cheap", -0.5))
        .await
        .unwrap_err();
    assert_eq!(err.rpc().map(|e| e.status), Some(400));

    let listed = system
        .client
        .find_all_products(PaginationQuery::default())
        .await
        .unwrap();
    assert!(listed.data.is_empty());
    assert_eq!(listed.meta.last_page, 0);

    system.shutdown().await.unwrap();
}
