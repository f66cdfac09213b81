//! # Schema Trait
//!
//! The `Schema` trait is the contract a concrete data model implements to be hosted by the
//! generic [`StoreActor`](crate::StoreActor). It names the queries the store answers, the
//! mutations it accepts, the keys it hands out, and the error raised when a constraint fails.
//!
//! # Architecture Note
//! The actor loop, the channels, and the commit protocol are written *once* here. A schema
//! only decides what a query returns and how a single mutation changes the tables.
//!
//! We use associated types so that a camp query cannot be sent to a store hosting some other
//! schema. The compiler rejects it.
//!
//! # Atomicity
//! `apply` is called once per staged mutation on a *working copy* of the schema. If any call
//! fails, the working copy is dropped and the live state is untouched. Implementations are
//! free to leave `self` half-modified when returning an error.

use std::fmt::Debug;

/// Outcome of applying one mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied<K> {
    /// Number of rows the mutation touched. Zero means the target did not exist.
    pub rows: usize,
    /// Key assigned by the store, for inserts.
    pub key: Option<K>,
}

impl<K> Applied<K> {
    /// A mutation that touched nothing.
    pub fn none() -> Self {
        Self { rows: 0, key: None }
    }

    /// A mutation that touched `rows` rows without assigning a key.
    pub fn rows(rows: usize) -> Self {
        Self { rows, key: None }
    }

    /// An insert that touched `rows` rows and was assigned `key`.
    pub fn inserted(rows: usize, key: K) -> Self {
        Self {
            rows,
            key: Some(key),
        }
    }
}

/// Trait that any data model must implement to be hosted by a `StoreActor`.
///
/// `Clone` is required because commits are applied to a copy first.
pub trait Schema: Clone + Send + Sync + 'static {
    /// A read request (point lookup or filtered scan).
    type Query: Send + Debug;

    /// The answer to a query.
    type Output: Send + Debug;

    /// A single buffered write.
    type Mutation: Send + Debug;

    /// Identifier assigned by the store on insert.
    type Key: Send + Clone + Debug;

    /// Constraint or consistency failure raised by the schema.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Answer a query against the current committed state.
    fn query(&self, query: Self::Query) -> Result<Self::Output, Self::Error>;

    /// Apply one mutation.
    fn apply(&mut self, mutation: Self::Mutation) -> Result<Applied<Self::Key>, Self::Error>;
}
