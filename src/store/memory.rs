//! In-memory product store
//!
//! Mirrors the PostgreSQL store: ids come from a counter that starts at 1
//! and never reuses values, like a `SERIAL` column.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{Product, ProductPayload, ProductStore, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

/// Product store held in process memory
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Storage("Lock poisoned".to_string())
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn fetch(&self, id: i32) -> StoreResult<Product> {
        let inner = self.inner.read().map_err(poisoned)?;
        inner.rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn list(&self, start: i64, count: i64) -> StoreResult<Vec<Product>> {
        let start = usize::try_from(start.max(0)).unwrap_or(usize::MAX);
        let count = usize::try_from(count.max(0)).unwrap_or(usize::MAX);

        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.rows.values().skip(start).take(count).cloned().collect())
    }

    async fn create(&self, payload: ProductPayload) -> StoreResult<Product> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Storage("Product id sequence exhausted".to_string()))?;
        inner.last_id = id;

        let product = payload.with_id(id);
        inner.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        if let Some(existing) = inner.rows.get_mut(&product.id) {
            existing.name = product.name.clone();
            existing.quantity = product.quantity;
            existing.price = product.price;
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        inner.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn payload(name: &str, quantity: i32, price: i64) -> ProductPayload {
        ProductPayload {
            name: name.to_string(),
            quantity,
            price: Decimal::from(price),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = InMemoryProductStore::new();
        let a = store.create(payload("a", 1, 10)).await.unwrap();
        let b = store.create(payload("b", 2, 20)).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.fetch(2).await.unwrap(), b);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = InMemoryProductStore::new();
        store.create(payload("a", 1, 10)).await.unwrap();
        store.delete(1).await.unwrap();
        let next = store.create(payload("b", 1, 10)).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_fetch_missing_is_not_found() {
        let store = InMemoryProductStore::new();
        assert!(store.fetch(9).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_orders_by_id_with_offset_and_limit() {
        let store = InMemoryProductStore::new();
        for i in 0..5 {
            store.create(payload(&format!("p{}", i), i, 1)).await.unwrap();
        }

        let page = store.list(1, 2).await.unwrap();
        let ids: Vec<i32> = page.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);

        assert!(store.list(10, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_rows_are_noops() {
        let store = InMemoryProductStore::new();
        store
            .update(&Product::new(42, "ghost", 1, Decimal::ONE))
            .await
            .unwrap();
        store.delete(42).await.unwrap();
        assert!(store.list(0, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let store = InMemoryProductStore::new();
        let created = store.create(payload("old", 1, 5)).await.unwrap();

        let changed = Product::new(created.id, "new", 9, Decimal::from(7));
        store.update(&changed).await.unwrap();

        assert_eq!(store.fetch(created.id).await.unwrap(), changed);
    }
}
