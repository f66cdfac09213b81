//! # Store Client
//!
//! The `StoreClient<S>` provides a type-safe, async API for talking to a `StoreActor<S>`.
//! It forwards requests over a Tokio mpsc channel and receives results via oneshot channels.
//! The client holds only a sender, so it is cheap to clone and share across tasks.

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::schema::{Applied, Schema};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
pub struct StoreClient<S: Schema> {
    sender: mpsc::Sender<StoreRequest<S>>,
}

// Manual impl: deriving would require `S: Clone` on the handle, which we don't need.
impl<S: Schema> Clone for StoreClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Schema> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>) -> Self {
        Self { sender }
    }

    pub async fn query(&self, query: S::Query) -> Result<S::Output, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Query { query, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Applies `batch` atomically. Returns one receipt per mutation, in order.
    pub async fn commit(&self, batch: Vec<S::Mutation>) -> Result<Vec<Applied<S::Key>>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Commit { batch, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }
}
