//! # Store Messages
//!
//! Requests sent from a [`StoreClient`](crate::StoreClient) to the
//! [`StoreActor`](crate::StoreActor).

use crate::error::StoreError;
use crate::schema::{Applied, Schema};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store.
///
/// There are only two verbs. Reads go through `Query` and see committed state only.
/// Writes are never sent one at a time: a unit of work buffers them and ships the whole
/// batch in a single `Commit`, which either lands completely or not at all.
#[derive(Debug)]
pub enum StoreRequest<S: Schema> {
    Query {
        query: S::Query,
        respond_to: Response<S::Output>,
    },
    Commit {
        batch: Vec<S::Mutation>,
        respond_to: Response<Vec<Applied<S::Key>>>,
    },
}
