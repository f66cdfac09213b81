//! # Talks Resource
//!
//! `/camps/{moniker}/talks` and `/camps/{moniker}/talks/{id}`.

use crate::api::{ApiError, ApiResult, Reply, ResourceLinks};
use crate::model::{SpeakerId, Talk, TalkId};
use crate::projector::{Mapping, Projector};
use crate::repository::{CampRepository, Record};
use crate::shapes::TalkShape;
use tracing::{debug, info, instrument};

/// Orchestrates talk requests nested under a camp.
pub struct TalksApi<R> {
    repository: R,
    projector: Projector,
    links: ResourceLinks,
}

impl<R: CampRepository> TalksApi<R> {
    pub fn new(repository: R, projector: Projector, links: ResourceLinks) -> Self {
        Self {
            repository,
            projector,
            links,
        }
    }

    /// `GET /camps/{moniker}/talks`, speakers included.
    ///
    /// The camp itself is not checked: an unknown moniker lists no talks.
    #[instrument(skip(self))]
    pub async fn list(&self, moniker: &str) -> ApiResult<Vec<TalkShape>> {
        let repo = self.repository.unit_of_work();
        let talks = repo.get_talks_by_moniker(moniker, true).await?;
        Ok(Reply::Ok(self.projector.to_external_all(&talks)))
    }

    /// `GET /camps/{moniker}/talks/{id}`.
    #[instrument(skip(self))]
    pub async fn get(&self, moniker: &str, talk_id: u32) -> ApiResult<TalkShape> {
        let repo = self.repository.unit_of_work();
        let talk = repo
            .get_talk(moniker, TalkId(talk_id), true)
            .await?
            .ok_or_else(talk_not_found)?;
        Ok(Reply::Ok(self.projector.to_external(&talk)))
    }

    /// `POST /camps/{moniker}/talks`.
    ///
    /// Checked in order: shape, camp, speaker reference, speaker. Nothing is staged unless
    /// all of them pass.
    #[instrument(skip(self, shape))]
    pub async fn create(&self, moniker: &str, shape: TalkShape) -> ApiResult<TalkShape> {
        debug!(?shape, "create called");
        shape.validate_for_create()?;

        let mut repo = self.repository.unit_of_work();
        let camp = repo
            .get_camp(moniker)
            .await?
            .ok_or_else(|| ApiError::validation("Camp does not exist"))?;

        let speaker_id = shape
            .speaker_id()
            .ok_or_else(|| ApiError::validation("Speaker ID is required"))?;
        let speaker = repo
            .get_speaker(SpeakerId(speaker_id))
            .await?
            .ok_or_else(|| ApiError::validation("Speaker could not be found"))?;

        let talks_uri = self
            .links
            .talks(&camp.moniker)
            .ok_or_else(|| ApiError::validation("Could not use current moniker"))?;

        let mut talk: Talk = self.projector.to_internal(&shape);
        talk.attach_to(&camp);
        talk.assign_speaker(speaker);

        repo.stage_add(Record::Talk(talk.clone()));
        if !repo.commit().await? {
            return Err(ApiError::commit_failed("Failed to save new talk"));
        }
        let talk_id = repo
            .committed_keys()
            .iter()
            .find_map(|k| k.talk())
            .ok_or_else(|| ApiError::Store("Talk was saved without an id".into()))?;
        talk.id = Some(talk_id);

        let location = format!("{talks_uri}/{}", talk_id.0);
        info!(moniker, %location, "Talk created");
        Ok(Reply::Created {
            location,
            body: self.projector.to_external(&talk),
        })
    }

    /// `PUT /camps/{moniker}/talks/{id}`.
    ///
    /// A submitted speaker reference is followed only if it resolves; an unknown speaker id
    /// leaves the current speaker in place and does not fail the request. A body that changes
    /// nothing fails its commit (400).
    #[instrument(skip(self, shape))]
    pub async fn update(&self, moniker: &str, talk_id: u32, shape: TalkShape) -> ApiResult<TalkShape> {
        debug!(?shape, "update called");
        shape.validate_for_update()?;

        let mut repo = self.repository.unit_of_work();
        let mut talk = repo
            .get_talk(moniker, TalkId(talk_id), true)
            .await?
            .ok_or_else(talk_not_found)?;

        self.projector.merge(&shape, &mut talk);
        if let Some(speaker_id) = shape.speaker_id() {
            match repo.get_speaker(SpeakerId(speaker_id)).await? {
                Some(speaker) => talk.assign_speaker(speaker),
                None => debug!(speaker_id, "Speaker not found, keeping current speaker"),
            }
        }

        repo.stage_update(Record::Talk(talk.clone()));
        if !repo.commit().await? {
            return Err(ApiError::commit_failed("Failed to save updated talk"));
        }
        info!(moniker, talk_id, "Talk updated");
        Ok(Reply::Ok(self.projector.to_external(&talk)))
    }

    /// `DELETE /camps/{moniker}/talks/{id}`.
    #[instrument(skip(self))]
    pub async fn delete(&self, moniker: &str, talk_id: u32) -> ApiResult<()> {
        let mut repo = self.repository.unit_of_work();
        let talk = repo
            .get_talk(moniker, TalkId(talk_id), false)
            .await?
            .ok_or_else(talk_not_found)?;

        repo.stage_delete(Record::Talk(talk));
        if !repo.commit().await? {
            return Err(ApiError::commit_failed("Failed to save deleted talk from database"));
        }
        info!(moniker, talk_id, "Talk deleted");
        Ok(Reply::Empty)
    }
}

fn talk_not_found() -> ApiError {
    ApiError::not_found("Couldn't find the talk")
}
