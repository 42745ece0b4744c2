//! # Catalog Messages
//!
//! One variant per message pattern. Each carries its payload and a one-shot
//! sender for the reply, so the server never needs to know who is calling.

use super::RpcError;
use crate::model::{PaginatedProducts, PaginationQuery, Product, ProductCreate, ProductUpdate};
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel of a request.
pub type Response<T> = oneshot::Sender<Result<T, RpcError>>;

/// Requests accepted by the [`CatalogServer`](super::CatalogServer).
#[derive(Debug)]
pub enum CatalogRequest {
    Create {
        params: ProductCreate,
        respond_to: Response<Product>,
    },
    FindAll {
        query: PaginationQuery,
        respond_to: Response<PaginatedProducts>,
    },
    FindOne {
        id: i64,
        respond_to: Response<Product>,
    },
    Update {
        id: i64,
        patch: ProductUpdate,
        respond_to: Response<Product>,
    },
    Remove {
        id: i64,
        respond_to: Response<Product>,
    },
    ValidateProducts {
        ids: Vec<i64>,
        respond_to: Response<Vec<Product>>,
    },
}

impl CatalogRequest {
    /// The message pattern name used in logs.
    pub fn pattern(&self) -> &'static str {
        match self {
            CatalogRequest::Create { .. } => "create_product",
            CatalogRequest::FindAll { .. } => "find_all_products",
            CatalogRequest::FindOne { .. } => "find_one_product",
            CatalogRequest::Update { .. } => "update_product",
            CatalogRequest::Remove { .. } => "delete_product",
            CatalogRequest::ValidateProducts { .. } => "validate_products",
        }
    }
}
