//! # Store Actor
//!
//! This module defines the `StoreActor`, the component that owns a schema's state and
//! serves every read and commit against it. It processes messages sequentially, so a commit
//! is never interleaved with another commit or with a query.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::schema::Schema;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that hosts a schema.
///
/// # Architecture Note
/// This struct is the "Server" half. It owns the state and the receiver end of the channel.
/// Because requests are handled one at a time inside a single task, the state needs no
/// `Mutex` or `RwLock`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Share**: Clone the client into every component that needs the store.
///
/// ```rust
/// use entity_store::{Applied, Schema, StoreActor};
///
/// #[derive(Clone, Default)]
/// struct Counter { value: u32 }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("never")]
/// struct Never;
///
/// impl Schema for Counter {
///     type Query = ();
///     type Output = u32;
///     type Mutation = u32;
///     type Key = ();
///     type Error = Never;
///
///     fn query(&self, _: ()) -> Result<u32, Never> { Ok(self.value) }
///     fn apply(&mut self, by: u32) -> Result<Applied<()>, Never> {
///         self.value += by;
///         Ok(Applied::rows(1))
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::new(10, Counter::default());
///     tokio::spawn(actor.run());
///
///     client.commit(vec![2, 3]).await.unwrap();
///     assert_eq!(client.query(()).await.unwrap(), 5);
/// }
/// ```
///
/// ## Operations
///
/// * **Query**: Evaluates the query against the committed state and returns the output.
///
/// * **Commit**:
///     1. Clones the committed state into a working copy.
///     2. Applies every mutation of the batch, in order, to the working copy.
///     3. On the first failure, drops the working copy and returns the error.
///     4. Otherwise swaps the working copy in and returns one receipt per mutation.
pub struct StoreActor<S: Schema> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
}

impl<S: Schema> StoreActor<S> {
    /// Creates a new `StoreActor` hosting `initial` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `initial` - The state the store starts with (empty or seeded).
    pub fn new(buffer_size: usize, initial: S) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: initial,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "CampDb" instead of "codecamp::store::CampDb")
        let schema = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(schema, "Store started");

        let mut commits: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Query { query, respond_to } => {
                    debug!(schema, ?query, "Query");
                    let result = self
                        .state
                        .query(query)
                        .map_err(|e| StoreError::Schema(Box::new(e)));
                    if let Err(e) = &result {
                        warn!(schema, error = %e, "Query failed");
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Commit { batch, respond_to } => {
                    debug!(schema, mutations = batch.len(), "Commit");
                    let mut working = self.state.clone();
                    let mut receipts = Vec::with_capacity(batch.len());
                    let mut failure = None;
                    for mutation in batch {
                        match working.apply(mutation) {
                            Ok(applied) => receipts.push(applied),
                            Err(e) => {
                                failure = Some(e);
                                break;
                            }
                        }
                    }
                    match failure {
                        Some(e) => {
                            warn!(schema, error = %e, "Commit rolled back");
                            let _ = respond_to.send(Err(StoreError::Schema(Box::new(e))));
                        }
                        None => {
                            self.state = working;
                            commits += 1;
                            let rows: usize = receipts.iter().map(|r| r.rows).sum();
                            info!(schema, rows, commits, "Committed");
                            let _ = respond_to.send(Ok(receipts));
                        }
                    }
                }
            }
        }

        info!(schema, commits, "Shutdown");
    }
}
