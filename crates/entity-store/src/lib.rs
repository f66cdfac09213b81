//! # Entity Store
//!
//! A small, schema-agnostic, in-memory entity store run as a Tokio actor.
//!
//! ## Why an Actor?
//!
//! The store has to offer two guarantees to the code above it:
//!
//! - **Reads see committed state only.** A unit of work buffers its writes locally and
//!   nothing it stages is visible to anyone until it commits.
//! - **Commits are atomic.** Every mutation of a batch lands, or none does.
//!
//! Running the store inside a single task that owns its state gives both for free: requests
//! are handled one after another, and a commit is applied to a working copy that replaces the
//! live state only once every mutation has succeeded.
//!
//! ## Architecture Overview
//!
//! 1. **Schema Layer** ([`Schema`]) - Your tables, queries and constraints
//! 2. **Runtime Layer** ([`StoreActor`]) - Message processing and the commit protocol
//! 3. **Interface Layer** ([`StoreClient`]) - Type-safe, cloneable handle
//!
//! ## Testing
//!
//! [`mock::MockStore`] hands out a real `StoreClient` answered from scripted expectations,
//! which makes store failures trivial to inject.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod schema;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use schema::{Applied, Schema};
