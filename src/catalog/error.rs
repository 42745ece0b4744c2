//! Error types for catalog operations.

use crate::rpc::RpcStatus;
use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum ProductError {
    /// No available product has this id.
    #[error("Product with id {id} not found")]
    NotFound { id: i64 },

    /// Bulk validation matched fewer rows than unique ids requested.
    #[error("Some products are invalid")]
    InvalidProducts,

    /// A storage failure, passed through untranslated.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ProductError {
    /// Status reported to RPC callers.
    ///
    /// A missing product is classified as a bad request rather than a 404:
    /// the caller asked for something it should not have.
    pub fn status(&self) -> RpcStatus {
        match self {
            ProductError::NotFound { .. } | ProductError::InvalidProducts => RpcStatus::BadRequest,
            ProductError::Store(_) => RpcStatus::InternalServerError,
        }
    }
}
