//! # Product Storage
//!
//! The catalog never talks to a database directly. It holds a [`ProductStore`]
//! and the store decides how rows are kept.
//!
//! - [`SqliteProductStore`]: the production store, backed by a `sqlx` pool.
//! - [`InMemoryProductStore`]: a map behind a lock, used by tests and demos.
//!
//! Stores do not know about the availability rule beyond the queries that name
//! it (`count_available`, `find_available*`). `update`, `set_available` and
//! `find_by_ids` address rows by id alone.

pub mod error;
pub mod memory;
pub mod sqlite;

pub use error::*;
pub use memory::*;
pub use sqlite::*;

use crate::model::{Product, ProductCreate, ProductUpdate};
use async_trait::async_trait;
use std::sync::Arc;

/// Shared handle to any store implementation.
pub type DynProductStore = Arc<dyn ProductStore>;

/// Persistence operations needed by the catalog.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts a new row with `available = true` and returns it with its id.
    async fn insert(&self, params: ProductCreate) -> Result<Product, StoreError>;

    /// Counts rows with `available = true`.
    async fn count_available(&self) -> Result<u64, StoreError>;

    /// Available rows ordered by id, skipping `skip` and returning at most `take`.
    ///
    /// A window past the last row is empty, never an error.
    async fn find_available_page(&self, skip: u64, take: u64) -> Result<Vec<Product>, StoreError>;

    /// The row with `id`, if it exists and is available.
    async fn find_available(&self, id: i64) -> Result<Option<Product>, StoreError>;

    /// Applies the present fields of `patch` to the row with `id`.
    async fn update(&self, id: i64, patch: ProductUpdate) -> Result<Product, StoreError>;

    /// Sets the availability flag of the row with `id`.
    async fn set_available(&self, id: i64, available: bool) -> Result<Product, StoreError>;

    /// Every row whose id is in `ids`, whatever its availability.
    ///
    /// Callers pass distinct ids; the list may be arbitrarily long.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, StoreError>;

    /// Releases the underlying connection. Calling it twice is harmless.
    async fn close(&self);
}
