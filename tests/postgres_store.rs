//! PostgreSQL Store Tests
//!
//! Runs the store against a throwaway Postgres container. Needs a Docker
//! daemon, so these are ignored by default:
//!
//! ```text
//! cargo test --test postgres_store -- --ignored
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

use product_api::store::{PgProductStore, PgStoreConfig, Product, ProductPayload, ProductStore};

// =============================================================================
// Helper Functions
// =============================================================================

async fn create_store() -> (ContainerAsync<Postgres>, PgProductStore) {
    let container = Postgres::default()
        .with_tag("16")
        .start()
        .await
        .expect("Failed to start Postgres container");

    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();

    let mut config = PgStoreConfig::new("postgres", "postgres", "postgres");
    config.host = host.to_string();
    config.port = port;

    let store = PgProductStore::connect_lazy(&config);
    store.ensure_table().await.expect("Failed to create table");

    (container, store)
}

fn payload(name: &str, quantity: i32, price: &str) -> ProductPayload {
    ProductPayload {
        name: name.to_string(),
        quantity,
        price: Decimal::from_str(price).unwrap(),
    }
}

// =============================================================================
// Store Semantics
// =============================================================================

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_create_then_fetch_round_trips() {
    let (_container, store) = create_store().await;

    let created = store.create(payload("sofa", 2, "99.99")).await.unwrap();
    assert_eq!(created.id, 1);

    let fetched = store.fetch(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_fetch_missing_row_is_not_found() {
    let (_container, store) = create_store().await;
    assert!(store.fetch(404).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_list_orders_by_id_with_offset() {
    let (_container, store) = create_store().await;
    for i in 0..6 {
        store
            .create(payload(&format!("p{}", i), i, "1.00"))
            .await
            .unwrap();
    }

    let page = store.list(2, 3).await.unwrap();
    let ids: Vec<i32> = page.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 4, 5]);

    assert!(store.list(100, 10).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_update_and_delete() {
    let (_container, store) = create_store().await;
    let created = store.create(payload("lamp", 1, "10")).await.unwrap();

    let changed = Product::new(created.id, "lamp v2", 4, Decimal::from_str("12.50").unwrap());
    store.update(&changed).await.unwrap();
    assert_eq!(store.fetch(created.id).await.unwrap(), changed);

    store.delete(created.id).await.unwrap();
    assert!(store.fetch(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_missing_rows_are_silent_noops() {
    let (_container, store) = create_store().await;

    store
        .update(&Product::new(999, "ghost", 1, Decimal::ONE))
        .await
        .unwrap();
    store.delete(999).await.unwrap();

    assert!(store.list(0, 10).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_ensure_table_is_idempotent() {
    let (_container, store) = create_store().await;
    store.ensure_table().await.unwrap();
}
