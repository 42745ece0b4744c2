//! Message-pattern transport in front of the catalog.
//!
//! This module provides the request/reply plumbing that lets any number of
//! callers reach one [`ProductCatalog`](crate::catalog::ProductCatalog).
//!
//! # Main Components
//!
//! - [`CatalogRequest`] - One variant per message pattern, each with a reply channel
//! - [`CatalogServer`] - Receives requests and dispatches each on its own task
//! - [`CatalogClient`] - Typed, cloneable client
//! - [`RpcError`] / [`ClientError`] - Failure values seen by callers
//!
//! # Testing
//!
//! See [`mock`] for helpers to test client callers without a running server.

pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod server;

pub use client::*;
pub use error::*;
pub use message::*;
pub use server::*;
