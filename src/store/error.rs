//! Error types for the storage layer.

use thiserror::Error;

/// Errors raised by a [`ProductStore`](super::ProductStore).
///
/// The catalog does not translate these; they reach the caller as they are.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A mutation addressed a row that does not exist.
    #[error("Record {0} does not exist")]
    RowNotFound(i64),

    /// The store was closed and can no longer serve requests.
    #[error("Store is closed")]
    Closed,

    /// A value could not be converted to or from its column type.
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// An underlying database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
