use crate::catalog::ProductCatalog;
use crate::config::CatalogConfig;
use crate::rpc::{CatalogClient, CatalogServer};
use crate::store::{DynProductStore, SqliteProductStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors raised while starting or stopping the service.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to open the product store: {0}")]
    Store(#[from] StoreError),

    #[error("Catalog server task failed: {0}")]
    ServerTask(String),
}

/// The runtime orchestrator of the product catalog service.
///
/// `CatalogSystem` is responsible for:
/// - **Connection Lifecycle**: Opening the store on start and closing it on shutdown
/// - **Wiring**: Giving the catalog its store and the server its catalog
/// - **Serving**: Running the RPC server on its own task
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::start(&CatalogConfig::default()).await?;
///
/// let product = system.client.create_product(ProductCreate::new("Desk", 120.0)).await?;
/// let page = system.client.find_all_products(PaginationQuery::default()).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for sending requests to the catalog server
    pub client: CatalogClient,

    store: DynProductStore,
    handle: JoinHandle<()>,
}

impl CatalogSystem {
    /// Connects the SQLite store named in `config` and starts serving.
    pub async fn start(config: &CatalogConfig) -> Result<Self, SystemError> {
        let store =
            SqliteProductStore::connect(&config.database_url, config.max_connections).await?;
        info!("Connected to the database");
        Ok(Self::with_store(Arc::new(store), config.buffer_size))
    }

    /// Starts serving on top of an already connected store.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_store(store: DynProductStore, buffer_size: usize) -> Self {
        let catalog = ProductCatalog::new(store.clone());
        let (server, client) = CatalogServer::new(catalog, buffer_size);
        let handle = tokio::spawn(server.run());

        Self {
            client,
            store,
            handle,
        }
    }

    /// Gracefully shuts down the service.
    ///
    /// Drops the client, waits for the server to finish its in-flight requests,
    /// then closes the store. The store is closed even if the server task
    /// panicked; the panic is reported afterwards.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down catalog...");

        // Closing the channel ends the server loop.
        drop(self.client);
        let joined = self.handle.await;

        self.store.close().await;

        if let Err(e) = joined {
            error!(error = %e, "Catalog server task failed");
            return Err(SystemError::ServerTask(e.to_string()));
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
