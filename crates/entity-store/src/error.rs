//! # Store Errors
//!
//! Errors surfaced by the store plumbing itself. Constraint failures raised by a schema are
//! boxed into [`StoreError::Schema`] so that clients see a single error type.

/// Errors that can occur while talking to a `StoreActor`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Schema error: {0}")]
    Schema(Box<dyn std::error::Error + Send + Sync>),
}
