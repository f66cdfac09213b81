//! # Mock Store & Testing Guide
//!
//! `MockStore<S>` hands out a real [`StoreClient<S>`] whose requests are answered from a queue
//! of expectations instead of a live schema. Use it to drive code that sits *on top of* the
//! store (repositories, resource handlers) into paths that a real store rarely takes, such as
//! a commit failing with a constraint error or a store that has gone away.
//!
//! ## When to use Mocks vs a Real Store
//!
//! | Feature | MockStore | StoreActor |
//! |---------|-----------|------------|
//! | **State** | None (scripted answers) | Real tables |
//! | **Determinism** | Fully deterministic | Fully deterministic |
//! | **Error Injection** | Easy (`return_err`) | Requires crafting a constraint violation |
//! | **Use Case** | Failure paths of callers | Behavior of the schema itself |
//!
//! ## Example
//!
//! ```rust
//! use entity_store::mock::MockStore;
//! use entity_store::{Applied, Schema, StoreError};
//!
//! #[derive(Clone, Default)]
//! struct Counter { value: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("never")] struct Never;
//!
//! impl Schema for Counter {
//!     type Query = (); type Output = u32; type Mutation = u32; type Key = (); type Error = Never;
//!     fn query(&self, _: ()) -> Result<u32, Never> { Ok(self.value) }
//!     fn apply(&mut self, by: u32) -> Result<Applied<()>, Never> { self.value += by; Ok(Applied::rows(1)) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Counter>::new();
//!     mock.expect_query().return_ok(7);
//!     mock.expect_commit().return_err(StoreError::StoreClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.query(()).await.unwrap(), 7);
//!     assert!(client.commit(vec![1]).await.is_err());
//!
//!     mock.verify();
//! }
//! ```
//!
//! A request arriving with no matching expectation at the head of the queue panics the mock's
//! background task; the caller then observes [`StoreError::StoreDropped`].

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::schema::{Applied, Schema};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the scripted answer.
enum Expectation<S: Schema> {
    Query {
        response: Result<S::Output, StoreError>,
    },
    Commit {
        response: Result<Vec<Applied<S::Key>>, StoreError>,
    },
}

type Expectations<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock store with expectation tracking for fluent testing.
pub struct MockStore<S: Schema> {
    client: StoreClient<S>,
    expectations: Expectations<S>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: Schema> Default for MockStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schema> MockStore<S> {
    /// Creates a new mock store with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let expectations: Expectations<S> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Query { respond_to, .. },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Commit { respond_to, .. },
                        Some(Expectation::Commit { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected store request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Expects a `query` request.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<S> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `commit` request.
    pub fn expect_commit(&mut self) -> CommitExpectationBuilder<S> {
        CommitExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<S: Schema> {
    expectations: Expectations<S>,
}

impl<S: Schema> QueryExpectationBuilder<S> {
    /// Answers the query with `output`.
    pub fn return_ok(self, output: S::Output) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Query {
                response: Ok(output),
            });
    }

    /// Fails the query with `error`.
    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Query {
                response: Err(error),
            });
    }
}

/// Builder for `commit` expectations.
pub struct CommitExpectationBuilder<S: Schema> {
    expectations: Expectations<S>,
}

impl<S: Schema> CommitExpectationBuilder<S> {
    /// Acknowledges the commit with `receipts`.
    pub fn return_ok(self, receipts: Vec<Applied<S::Key>>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Commit {
                response: Ok(receipts),
            });
    }

    /// Fails the commit with `error`.
    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Commit {
                response: Err(error),
            });
    }
}
