//! # Catalog Server
//!
//! The receiving half of the RPC channel. [`CatalogServer::run`] pulls
//! [`CatalogRequest`]s off an `mpsc` channel and hands each one to its own
//! Tokio task, so a slow store call never holds up the requests behind it.
//! The catalog is stateless, so the tasks share it without locking.

use super::client::CatalogClient;
use super::message::CatalogRequest;
use super::RpcError;
use crate::catalog::ProductCatalog;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn, Instrument};

/// Dispatch loop in front of a [`ProductCatalog`].
///
/// # Usage Pattern
///
/// 1. **Create**: `CatalogServer::new()` returns the server and a client.
/// 2. **Run**: spawn `server.run()` on the runtime.
/// 3. **Stop**: drop every clone of the client. The loop drains, waits for
///    in-flight requests and returns.
pub struct CatalogServer {
    receiver: mpsc::Receiver<CatalogRequest>,
    catalog: ProductCatalog,
}

impl CatalogServer {
    /// Creates a server and its client.
    ///
    /// `buffer_size` is the channel capacity. When it is full, client calls
    /// wait until there is space.
    pub fn new(catalog: ProductCatalog, buffer_size: usize) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let server = Self { receiver, catalog };
        (server, CatalogClient::new(sender))
    }

    /// Runs until every client has been dropped.
    pub async fn run(mut self) {
        info!("Catalog server started");
        let mut in_flight = JoinSet::new();
        let mut handled: u64 = 0;

        while let Some(request) = self.receiver.recv().await {
            handled += 1;
            let span = tracing::info_span!("request", pattern = request.pattern());
            in_flight.spawn(dispatch(self.catalog.clone(), request).instrument(span));

            while let Some(finished) = in_flight.try_join_next() {
                if let Err(e) = finished {
                    warn!(error = %e, "Request task failed");
                }
            }
        }

        while let Some(finished) = in_flight.join_next().await {
            if let Err(e) = finished {
                warn!(error = %e, "Request task failed");
            }
        }
        info!(handled, "Shutdown");
    }
}

async fn dispatch(catalog: ProductCatalog, request: CatalogRequest) {
    debug!("Dispatching");
    match request {
        CatalogRequest::Create { params, respond_to } => {
            let result = match params.validate() {
                Ok(()) => catalog.create(params).await.map_err(RpcError::from),
                Err(e) => Err(e.into()),
            };
            reply(respond_to, result);
        }
        CatalogRequest::FindAll { query, respond_to } => {
            reply(respond_to, catalog.find_all(query).await.map_err(RpcError::from));
        }
        CatalogRequest::FindOne { id, respond_to } => {
            reply(respond_to, catalog.find_one(id).await.map_err(RpcError::from));
        }
        CatalogRequest::Update { id, patch, respond_to } => {
            let result = match patch.validate() {
                Ok(()) => catalog.update(id, patch).await.map_err(RpcError::from),
                Err(e) => Err(e.into()),
            };
            reply(respond_to, result);
        }
        CatalogRequest::Remove { id, respond_to } => {
            reply(respond_to, catalog.remove(id).await.map_err(RpcError::from));
        }
        CatalogRequest::ValidateProducts { ids, respond_to } => {
            reply(
                respond_to,
                catalog.validate_products(&ids).await.map_err(RpcError::from),
            );
        }
    }
}

fn reply<T>(respond_to: super::Response<T>, result: Result<T, RpcError>) {
    if let Err(e) = &result {
        warn!(status = e.status, message = %e.message, "Request rejected");
    }
    if respond_to.send(result).is_err() {
        debug!("Caller went away before the reply");
    }
}
