//! # Repository
//!
//! [`CampRepository`] is the only way the resource API reaches the store.
//!
//! ## Unit of Work
//!
//! A repository value is one unit of work. Reads go straight to the store and only ever see
//! committed data. Writes are *staged* locally with `stage_add` / `stage_update` /
//! `stage_delete` and become durable only when `commit` succeeds. Nothing staged is visible
//! to anyone, including this unit of work's own reads, before that.
//!
//! The API keeps one long-lived repository and calls [`CampRepository::unit_of_work`] at the
//! start of every request, so no staged state is ever shared between requests.
//!
//! ## Commit Outcomes
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | `Ok(true)` | At least one row changed |
//! | `Ok(false)` | Nothing was staged, or the store touched zero rows |
//! | `Err(_)` | The store failed (constraint violation, store gone) |

pub mod error;
pub mod store_repository;

pub use error::*;
pub use store_repository::*;

use crate::model::{Camp, Speaker, SpeakerId, Talk, TalkId};
use crate::store::RecordKey;
use async_trait::async_trait;
use chrono::NaiveDate;

/// An entity handed to one of the staging operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Camp(Camp),
    Talk(Talk),
}

/// Contract between the resource API and the store.
#[async_trait]
pub trait CampRepository: Send + Sync {
    /// A fresh unit of work on the same store, with nothing staged.
    fn unit_of_work(&self) -> Self
    where
        Self: Sized;

    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, RepositoryError>;

    async fn get_camp(&self, moniker: &str) -> Result<Option<Camp>, RepositoryError>;

    /// Camps whose event falls on `date`. Empty, never absent, when none match.
    async fn get_camps_by_event_date(&self, date: NaiveDate, include_talks: bool) -> Result<Vec<Camp>, RepositoryError>;

    /// Talks of the camp called `moniker`. Empty when the camp does not exist.
    async fn get_talks_by_moniker(&self, moniker: &str, include_speaker: bool) -> Result<Vec<Talk>, RepositoryError>;

    async fn get_talk(&self, moniker: &str, talk_id: TalkId, include_speaker: bool) -> Result<Option<Talk>, RepositoryError>;

    async fn get_speaker(&self, speaker_id: SpeakerId) -> Result<Option<Speaker>, RepositoryError>;

    /// Buffers the insert of a new entity.
    fn stage_add(&mut self, record: Record);

    /// Buffers the write-back of an entity previously read and then modified.
    fn stage_update(&mut self, record: Record);

    /// Buffers the removal of a persisted entity.
    fn stage_delete(&mut self, record: Record);

    /// Number of buffered mutations.
    fn staged(&self) -> usize;

    /// Atomically persists everything staged, then clears the stage.
    async fn commit(&mut self) -> Result<bool, RepositoryError>;

    /// Keys the store assigned during the last successful commit, in staging order.
    fn committed_keys(&self) -> &[RecordKey];
}
