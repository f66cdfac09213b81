//! Constraint failures raised by the camp schema.

use crate::model::{CampId, SpeakerId};
use thiserror::Error;

/// Errors raised while applying a mutation to [`CampDb`](crate::store::CampDb).
///
/// Any of these rolls back the whole commit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CampDbError {
    /// Another camp already uses this moniker.
    #[error("Unique constraint violated: moniker '{0}' already exists")]
    DuplicateMoniker(String),

    /// A talk points at a camp that is not in the store.
    #[error("Foreign key violated: camp {0} does not exist")]
    MissingCamp(CampId),

    /// A talk points at a speaker that is not in the store.
    #[error("Foreign key violated: speaker {0} does not exist")]
    MissingSpeaker(SpeakerId),

    /// A talk was inserted without an owning camp.
    #[error("Talk has no owning camp")]
    Unattached,

    /// An update was staged for an entity the store never assigned an id to.
    #[error("Cannot update an unsaved {0}")]
    Unsaved(&'static str),
}
