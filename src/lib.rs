//! # Product Catalog
//!
//! > **A small catalog microservice: create, list, look up, update, soft-delete
//! > and bulk-validate products.**
//!
//! Every operation is a thin pass-through to a relational store. The only rules
//! the service adds are pagination math, the `available` soft-delete flag, and
//! a set-based existence check for bulk validation.
//!
//! ## 🏗️ Architecture Notes
//!
//! ### 1. Composition over inheritance
//! [`ProductCatalog`](catalog::ProductCatalog) *holds* a
//! [`ProductStore`](store::ProductStore) instead of being one. Connecting and
//! disconnecting belong to [`lifecycle`], not to the business operations.
//!
//! ### 2. Typed failures
//! Catalog operations return `Result<_, ProductError>`. At the RPC boundary the
//! error becomes an [`RpcError`](rpc::RpcError) carrying a message and a status
//! code. Storage errors are never rewritten on the way out.
//!
//! ### 3. Concurrency Model
//! The [`CatalogServer`](rpc::CatalogServer) runs each request on its own Tokio
//! task. The catalog has no state to protect; the store's pool does all the
//! waiting.
//!
//! ### 4. Observability
//! `tracing` spans wrap every request (`request{pattern=...}`) and every catalog
//! call. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: `Product`, payloads, pagination types and payload validation.
//! - [`store`]: the `ProductStore` trait with SQLite and in-memory implementations.
//! - [`catalog`]: `ProductCatalog` and `ProductError`.
//! - [`rpc`]: request messages, server loop, client, and mock helpers.
//! - [`lifecycle`]: `CatalogSystem` startup/shutdown and tracing setup.
//! - [`config`]: `CatalogConfig` from flags and environment.
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! DATABASE_URL=sqlite://catalog.db cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod rpc;
pub mod store;
