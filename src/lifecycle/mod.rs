//! # Service Lifecycle
//!
//! Starting the service means more than building a catalog: the store has to be
//! connected, the RPC server spawned, and on the way out everything released
//! in the right order. [`CatalogSystem`] owns that sequence.
//!
//! ## Startup
//!
//! 1. **Connect** - open the SQLite pool and make sure the table exists
//! 2. **Wire** - wrap the store in a [`ProductCatalog`](crate::catalog::ProductCatalog)
//! 3. **Serve** - spawn the [`CatalogServer`](crate::rpc::CatalogServer) loop
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Server drains** - `recv()` returns `None`, in-flight requests finish
//! 3. **Await completion** - the server task is joined
//! 4. **Release** - the store connection is closed
//!
//! Clones of the client handed out to other tasks keep the server alive, so
//! they must be dropped before calling [`CatalogSystem::shutdown`].
//!
//! ## Observability
//!
//! See the [`tracing`] module for subscriber setup.

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::*;
pub use self::tracing::*;
