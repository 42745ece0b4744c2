//! # Mock Helpers
//!
//! Utilities for testing code that holds a [`CatalogClient`] without running a
//! server.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then the `expect_*` helpers to pull the next request off the
//! channel, assert on it, and answer through its reply sender.

use super::message::{CatalogRequest, Response};
use super::CatalogClient;
use crate::model::{Product, ProductCreate, ProductUpdate};
use tokio::sync::mpsc;

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Next request of any pattern.
pub async fn expect_request(receiver: &mut mpsc::Receiver<CatalogRequest>) -> Option<CatalogRequest> {
    receiver.recv().await
}

/// Next request, if it is a `Create`.
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(ProductCreate, Response<Product>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `FindOne`.
pub async fn expect_find_one(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(i64, Response<Product>)> {
    match receiver.recv().await {
        Some(CatalogRequest::FindOne { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an `Update`.
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(i64, ProductUpdate, Response<Product>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Update {
            id,
            patch,
            respond_to,
        }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `ValidateProducts`.
pub async fn expect_validate(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(Vec<i64>, Response<Vec<Product>>)> {
    match receiver.recv().await {
        Some(CatalogRequest::ValidateProducts { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}
