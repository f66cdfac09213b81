//! # Camps Resource
//!
//! `/camps` and `/camps/{moniker}`.

use crate::api::{ApiError, ApiResult, Reply, ResourceLinks};
use crate::model::Camp;
use crate::projector::{Mapping, Projector};
use crate::repository::{CampRepository, Record};
use crate::shapes::CampShape;
use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

/// Orchestrates camp requests: preconditions, repository calls, projection.
pub struct CampsApi<R> {
    repository: R,
    projector: Projector,
    links: ResourceLinks,
}

impl<R: CampRepository> CampsApi<R> {
    pub fn new(repository: R, projector: Projector, links: ResourceLinks) -> Self {
        Self {
            repository,
            projector,
            links,
        }
    }

    /// `GET /camps`. An empty store yields an empty array, never 404.
    #[instrument(skip(self))]
    pub async fn list(&self, include_talks: bool) -> ApiResult<Vec<CampShape>> {
        let repo = self.repository.unit_of_work();
        let camps = repo.get_all_camps(include_talks).await?;
        debug!(count = camps.len(), "Listed camps");
        Ok(Reply::Ok(self.projector.to_external_all(&camps)))
    }

    /// `GET /camps/{moniker}`.
    #[instrument(skip(self))]
    pub async fn get(&self, moniker: &str) -> ApiResult<CampShape> {
        let repo = self.repository.unit_of_work();
        let camp = repo
            .get_camp(moniker)
            .await?
            .ok_or_else(|| camp_not_found(moniker))?;
        Ok(Reply::Ok(self.projector.to_external(&camp)))
    }

    /// `GET /camps/search?theDate=`. Unlike `list`, an empty result is a 404.
    #[instrument(skip(self))]
    pub async fn search(&self, the_date: NaiveDate, include_talks: bool) -> ApiResult<Vec<CampShape>> {
        let repo = self.repository.unit_of_work();
        let camps = repo.get_camps_by_event_date(the_date, include_talks).await?;
        if camps.is_empty() {
            return Err(ApiError::not_found(format!("No camps found on {the_date}")));
        }
        Ok(Reply::Ok(self.projector.to_external_all(&camps)))
    }

    /// `POST /camps`.
    ///
    /// The moniker check is a plain read before the write; two concurrent creates can both
    /// pass it, in which case the store's unique constraint fails the second commit (500).
    #[instrument(skip(self, shape))]
    pub async fn create(&self, shape: CampShape) -> ApiResult<CampShape> {
        debug!(?shape, "create called");
        shape.validate_for_create()?;
        let moniker = shape.moniker.as_deref().unwrap_or_default();

        let mut repo = self.repository.unit_of_work();
        if repo.get_camp(moniker).await?.is_some() {
            warn!(moniker, "Moniker in use");
            return Err(ApiError::validation("Moniker in use"));
        }

        let location = self
            .links
            .camp(moniker)
            .ok_or_else(|| ApiError::validation("Could not use current moniker"))?;

        let mut camp: Camp = self.projector.to_internal(&shape);
        for talk in &camp.talks {
            let speaker_id = talk
                .speaker_id
                .ok_or_else(|| ApiError::validation("Speaker ID is required"))?;
            if repo.get_speaker(speaker_id).await?.is_none() {
                return Err(ApiError::validation("Speaker could not be found"));
            }
        }

        repo.stage_add(Record::Camp(camp.clone()));
        if !repo.commit().await? {
            return Err(ApiError::commit_failed("Failed to save new camp"));
        }
        camp.id = repo.committed_keys().iter().find_map(|k| k.camp());
        if !camp.talks.is_empty() {
            camp.talks = repo.get_talks_by_moniker(&camp.moniker, true).await?;
        }

        info!(moniker, %location, "Camp created");
        Ok(Reply::Created {
            location,
            body: self.projector.to_external(&camp),
        })
    }

    /// `PUT /camps/{moniker}`: overlays the submitted fields onto the stored camp.
    ///
    /// A body that changes nothing leaves the store untouched, so its commit fails (400).
    #[instrument(skip(self, shape))]
    pub async fn update(&self, moniker: &str, shape: CampShape) -> ApiResult<CampShape> {
        debug!(?shape, "update called");
        shape.validate_for_update()?;

        let mut repo = self.repository.unit_of_work();
        let mut camp = repo
            .get_camp(moniker)
            .await?
            .ok_or_else(|| camp_not_found(moniker))?;

        if let Some(submitted) = shape.moniker.as_deref() {
            if !submitted.eq_ignore_ascii_case(&camp.moniker) {
                return Err(ApiError::validation("Moniker cannot be changed"));
            }
        }

        self.projector.merge(&shape, &mut camp);
        repo.stage_update(Record::Camp(camp.clone()));
        if !repo.commit().await? {
            return Err(ApiError::commit_failed("Failed to save updated camp"));
        }
        info!(moniker, "Camp updated");
        Ok(Reply::Ok(self.projector.to_external(&camp)))
    }

    /// `DELETE /camps/{moniker}`. The camp's talks go with it.
    #[instrument(skip(self))]
    pub async fn delete(&self, moniker: &str) -> ApiResult<()> {
        let mut repo = self.repository.unit_of_work();
        let camp = repo
            .get_camp(moniker)
            .await?
            .ok_or_else(|| camp_not_found(moniker))?;

        repo.stage_delete(Record::Camp(camp));
        if !repo.commit().await? {
            return Err(ApiError::commit_failed("Failed to delete camp"));
        }
        info!(moniker, "Camp deleted");
        Ok(Reply::Empty)
    }
}

fn camp_not_found(moniker: &str) -> ApiError {
    ApiError::not_found(format!("Could not find camp with moniker of {moniker}"))
}
