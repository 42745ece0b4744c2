//! # RPC Errors
//!
//! [`RpcError`] is what a caller sees when a request fails on the server side:
//! a message plus a numeric status. [`ClientError`] adds the failures that
//! happen before a reply exists, such as a server that has shut down.

use crate::catalog::ProductError;
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status classification attached to every [`RpcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcStatus {
    BadRequest,
    InternalServerError,
}

impl RpcStatus {
    pub fn code(self) -> u16 {
        match self {
            RpcStatus::BadRequest => 400,
            RpcStatus::InternalServerError => 500,
        }
    }
}

/// Failure payload returned over the RPC channel.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} (status {status})")]
pub struct RpcError {
    pub message: String,
    pub status: u16,
}

impl RpcError {
    pub fn new(status: RpcStatus, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: status.code(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}

impl From<ProductError> for RpcError {
    fn from(e: ProductError) -> Self {
        RpcError::new(e.status(), e.to_string())
    }
}

impl From<ValidationError> for RpcError {
    fn from(e: ValidationError) -> Self {
        RpcError::new(RpcStatus::BadRequest, e.to_string())
    }
}

/// Errors seen by a [`CatalogClient`](super::CatalogClient).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The server replied with a failure.
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The server is no longer receiving requests.
    #[error("Catalog server closed")]
    ServerClosed,

    /// The server accepted the request but never replied.
    #[error("Catalog server dropped response channel")]
    ServerDropped,
}

impl ClientError {
    /// The RPC failure, if the server produced one.
    pub fn rpc(&self) -> Option<&RpcError> {
        match self {
            ClientError::Rpc(e) => Some(e),
            _ => None,
        }
    }
}
