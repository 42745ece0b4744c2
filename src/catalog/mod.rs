//! # Product Catalog
//!
//! [`ProductCatalog`] is the business facade of the service. It owns no state of
//! its own: every call goes straight to the [`ProductStore`](crate::store::ProductStore)
//! it was built with.
//!
//! ## Availability
//!
//! A product is visible to [`find_one`](ProductCatalog::find_one),
//! [`find_all`](ProductCatalog::find_all), [`update`](ProductCatalog::update) and
//! [`remove`](ProductCatalog::remove) only while `available` is `true`.
//! [`validate_products`](ProductCatalog::validate_products) is the exception and
//! checks existence alone, so a removed product still validates.
//!
//! ## Check-then-mutate
//!
//! `update` and `remove` first call `find_one` and then issue the mutation as
//! a second, separate store call. Nothing holds the row in between. If another
//! request removes the product in that window, the mutation still lands on
//! the now-unavailable row and the caller receives it.

pub mod error;

pub use error::*;

use crate::model::{PaginatedProducts, PaginationQuery, Product, ProductCreate, ProductUpdate};
use crate::store::DynProductStore;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// Stateless catalog operations over a shared store.
#[derive(Clone)]
pub struct ProductCatalog {
    store: DynProductStore,
}

impl ProductCatalog {
    pub fn new(store: DynProductStore) -> Self {
        Self { store }
    }

    /// Inserts a new, available product.
    #[instrument(skip(self, params))]
    pub async fn create(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!(?params, "create called");
        let product = self.store.insert(params).await?;
        info!(product_id = product.id, "Created");
        Ok(product)
    }

    /// Returns one page of available products and the page metadata.
    #[instrument(skip(self))]
    pub async fn find_all(&self, query: PaginationQuery) -> Result<PaginatedProducts, ProductError> {
        let total = self.store.count_available().await?;
        let data = self
            .store
            .find_available_page(query.skip(), query.take())
            .await?;
        debug!(total, returned = data.len(), "Page loaded");

        Ok(PaginatedProducts {
            data,
            meta: query.meta(total),
        })
    }

    /// Looks up an available product.
    #[instrument(skip(self))]
    pub async fn find_one(&self, id: i64) -> Result<Product, ProductError> {
        match self.store.find_available(id).await? {
            Some(product) => Ok(product),
            None => {
                warn!(product_id = id, "Not found");
                Err(ProductError::NotFound { id })
            }
        }
    }

    /// Applies `patch` to an available product. Any id inside the patch is ignored.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: ProductUpdate) -> Result<Product, ProductError> {
        debug!(?patch, "update called");
        let patch = patch.without_id();
        self.find_one(id).await?;

        let product = self.store.update(id, patch).await?;
        info!(product_id = id, "Updated");
        Ok(product)
    }

    /// Soft-deletes an available product and returns the row after the flip.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> Result<Product, ProductError> {
        self.find_one(id).await?;

        let product = self.store.set_available(id, false).await?;
        info!(product_id = id, "Marked unavailable");
        Ok(product)
    }

    /// Checks that every id refers to an existing row, available or not.
    ///
    /// Duplicates are collapsed first. The rows come back in store order, not
    /// in the order of `ids`.
    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    pub async fn validate_products(&self, ids: &[i64]) -> Result<Vec<Product>, ProductError> {
        let unique: Vec<i64> = ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        let products = self.store.find_by_ids(&unique).await?;

        if products.len() != unique.len() {
            warn!(unique = unique.len(), found = products.len(), "Validation failed");
            return Err(ProductError::InvalidProducts);
        }

        debug!(unique = unique.len(), "Validated");
        Ok(products)
    }
}
