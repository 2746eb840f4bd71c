//! Product data access
//!
//! Each store operation maps to a single statement against the product
//! table. Two implementations share the `ProductStore` trait:
//!
//! - `PgProductStore` backed by a PostgreSQL connection pool
//! - `InMemoryProductStore` used by tests and `serve --in-memory`
//!
//! # Semantics
//!
//! - `fetch` reports a missing row as `StoreError::NotFound`
//! - `list` orders by id ascending, skipping `start` rows
//! - `update` and `delete` do not check that the row exists

mod errors;
mod memory;
mod postgres;
mod product;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryProductStore;
pub use postgres::{PgProductStore, PgStoreConfig};
pub use product::{Product, ProductPayload};

use async_trait::async_trait;

/// Data access for product rows
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch the product with the given id
    async fn fetch(&self, id: i32) -> StoreResult<Product>;

    /// List at most `count` products after skipping `start`, ordered by id
    async fn list(&self, start: i64, count: i64) -> StoreResult<Vec<Product>>;

    /// Insert a new product and return it with its assigned id
    async fn create(&self, payload: ProductPayload) -> StoreResult<Product>;

    /// Overwrite name, quantity and price of the row matching `product.id`
    async fn update(&self, product: &Product) -> StoreResult<()>;

    /// Remove the row matching `id`
    async fn delete(&self, id: i32) -> StoreResult<()>;
}
