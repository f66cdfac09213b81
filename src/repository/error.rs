//! Error types for the repository.

use entity_store::StoreError;
use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// All of them are store-level failures. "Not found" and "nothing changed" are ordinary
/// results (`Ok(None)`, `Ok(false)`), not errors.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store rejected or could not serve the request.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The store answered a query with the wrong kind of output.
    #[error("Unexpected store answer to {0}")]
    UnexpectedOutput(&'static str),
}
