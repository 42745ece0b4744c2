//! In-memory product store for tests and demos.

use super::{ProductStore, StoreError};
use crate::model::{Product, ProductCreate, ProductUpdate};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps rows in a `BTreeMap` so iteration follows id order, like the SQL store.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    rows: Arc<RwLock<BTreeMap<i64, Product>>>,
    next_id: Arc<AtomicI64>,
    closed: Arc<AtomicBool>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(StoreError::Closed);
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, params: ProductCreate) -> Result<Product, StoreError> {
        self.ensure_open()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let product = Product {
            id,
            name: params.name,
            price: params.price,
            available: true,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().await.insert(id, product.clone());
        Ok(product)
    }

    async fn count_available(&self) -> Result<u64, StoreError> {
        self.ensure_open()?;
        let rows = self.rows.read().await;
        Ok(rows.values().filter(|p| p.available).count() as u64)
    }

    async fn find_available_page(&self, skip: u64, take: u64) -> Result<Vec<Product>, StoreError> {
        self.ensure_open()?;
        // No map can hold usize::MAX rows, so saturating keeps the window empty.
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = usize::try_from(take).unwrap_or(usize::MAX);
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|p| p.available)
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn find_available(&self, id: i64) -> Result<Option<Product>, StoreError> {
        self.ensure_open()?;
        let rows = self.rows.read().await;
        Ok(rows.get(&id).filter(|p| p.available).cloned())
    }

    async fn update(&self, id: i64, patch: ProductUpdate) -> Result<Product, StoreError> {
        self.ensure_open()?;
        let mut rows = self.rows.write().await;
        let product = rows.get_mut(&id).ok_or(StoreError::RowNotFound(id))?;
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn set_available(&self, id: i64, available: bool) -> Result<Product, StoreError> {
        self.ensure_open()?;
        let mut rows = self.rows.write().await;
        let product = rows.get_mut(&id).ok_or(StoreError::RowNotFound(id))?;
        product.available = available;
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, StoreError> {
        self.ensure_open()?;
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
