//! # Catalog Client
//!
//! Typed calls over the RPC channel. It wraps the raw `mpsc` sender and
//! exposes one method per message pattern.

use super::message::{CatalogRequest, Response};
use super::ClientError;
use crate::model::{PaginatedProducts, PaginationQuery, Product, ProductCreate, ProductUpdate};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for the catalog server. Holds only a sender, so cloning is cheap.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    async fn call<T>(
        &self,
        build: impl FnOnce(Response<T>) -> CatalogRequest,
    ) -> Result<T, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ClientError::ServerClosed)?;
        let result = response.await.map_err(|_| ClientError::ServerDropped)?;
        Ok(result?)
    }

    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ClientError> {
        debug!(?params, "Sending request");
        self.call(|respond_to| CatalogRequest::Create { params, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_all_products(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedProducts, ClientError> {
        debug!("Sending request");
        self.call(|respond_to| CatalogRequest::FindAll { query, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_one_product(&self, id: i64) -> Result<Product, ClientError> {
        debug!("Sending request");
        self.call(|respond_to| CatalogRequest::FindOne { id, respond_to })
            .await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, id: i64, patch: ProductUpdate) -> Result<Product, ClientError> {
        debug!(?patch, "Sending request");
        self.call(|respond_to| CatalogRequest::Update {
            id,
            patch,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&self, id: i64) -> Result<Product, ClientError> {
        debug!("Sending request");
        self.call(|respond_to| CatalogRequest::Remove { id, respond_to })
            .await
    }

    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    pub async fn validate_products(&self, ids: Vec<i64>) -> Result<Vec<Product>, ClientError> {
        debug!("Sending request");
        self.call(|respond_to| CatalogRequest::ValidateProducts { ids, respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::mock::{create_mock_client, expect_find_one, expect_request, expect_validate};
    use crate::rpc::{RpcError, RpcStatus};
    use chrono::Utc;

    fn product(id: i64) -> Product {
        let now = Utc::now();
        Product {
            id,
            name: format!("Product {id}"),
            price: 10.0,
            available: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn find_one_returns_server_reply() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.find_one_product(3).await });

        let (id, responder) = expect_find_one(&mut receiver)
            .await
            .expect("Expected FindOne request");
        assert_eq!(id, 3);
        responder.send(Ok(product(3))).unwrap();

        let result = task.await.unwrap();
        assert_eq!(result.unwrap().id, 3);
    }

    #[tokio::test]
    async fn rpc_failure_is_surfaced_unchanged() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.validate_products(vec![1, 1, 2]).await });

        let (ids, responder) = expect_validate(&mut receiver)
            .await
            .expect("Expected ValidateProducts request");
        assert_eq!(ids, vec![1, 1, 2]);
        let failure = RpcError::new(RpcStatus::BadRequest, "Some products are invalid");
        responder.send(Err(failure.clone())).unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Err(ClientError::Rpc(failure)));
    }

    #[tokio::test]
    async fn dropped_reply_is_reported() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.remove_product(5).await });

        let request = expect_request(&mut receiver).await.expect("Expected request");
        assert_eq!(request.pattern(), "delete_product");
        drop(request);

        let result = task.await.unwrap();
        assert_eq!(result, Err(ClientError::ServerDropped));
    }
}
