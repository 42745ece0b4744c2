//! Plain data types exchanged between the store, the catalog and the RPC layer.

pub mod pagination;
pub mod product;

pub use pagination::*;
pub use product::*;

use thiserror::Error;

/// A payload rejected before it reaches the store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("price must be a finite number, got {0}")]
    NonFinitePrice(f64),

    #[error("price must not be negative, got {0}")]
    NegativePrice(f64),

    #[error("price allows at most {max} decimal places, got {price}")]
    TooManyDecimals { price: f64, max: u32 },
}
