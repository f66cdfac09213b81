//! # Store Repository
//!
//! [`CampRepository`] implemented on top of a [`StoreClient<CampDb>`].

use crate::model::{Camp, Speaker, SpeakerId, Talk, TalkId};
use crate::repository::{CampRepository, Record, RepositoryError};
use crate::store::{CampDb, CampMutation, CampOutput, CampQuery, RecordKey};
use async_trait::async_trait;
use chrono::NaiveDate;
use entity_store::StoreClient;
use tracing::{debug, instrument, warn};

/// A unit of work against the camp store.
pub struct StoreRepository {
    client: StoreClient<CampDb>,
    staged: Vec<CampMutation>,
    committed: Vec<RecordKey>,
}

impl StoreRepository {
    pub fn new(client: StoreClient<CampDb>) -> Self {
        Self {
            client,
            staged: Vec::new(),
            committed: Vec::new(),
        }
    }

    async fn camps(&self, query: CampQuery) -> Result<Vec<Camp>, RepositoryError> {
        match self.client.query(query).await? {
            CampOutput::Camps(camps) => Ok(camps),
            _ => Err(RepositoryError::UnexpectedOutput("a camp scan")),
        }
    }

    async fn talks(&self, query: CampQuery) -> Result<Vec<Talk>, RepositoryError> {
        match self.client.query(query).await? {
            CampOutput::Talks(talks) => Ok(talks),
            _ => Err(RepositoryError::UnexpectedOutput("a talk scan")),
        }
    }
}

#[async_trait]
impl CampRepository for StoreRepository {
    fn unit_of_work(&self) -> Self {
        Self::new(self.client.clone())
    }

    #[instrument(skip(self))]
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, RepositoryError> {
        debug!("Sending request");
        self.camps(CampQuery::AllCamps { include_talks }).await
    }

    #[instrument(skip(self))]
    async fn get_camp(&self, moniker: &str) -> Result<Option<Camp>, RepositoryError> {
        debug!("Sending request");
        let query = CampQuery::Camp {
            moniker: moniker.to_string(),
            include_talks: false,
        };
        match self.client.query(query).await? {
            CampOutput::Camp(camp) => Ok(camp),
            _ => Err(RepositoryError::UnexpectedOutput("a camp lookup")),
        }
    }

    #[instrument(skip(self))]
    async fn get_camps_by_event_date(&self, date: NaiveDate, include_talks: bool) -> Result<Vec<Camp>, RepositoryError> {
        debug!("Sending request");
        self.camps(CampQuery::CampsByEventDate { date, include_talks }).await
    }

    #[instrument(skip(self))]
    async fn get_talks_by_moniker(&self, moniker: &str, include_speaker: bool) -> Result<Vec<Talk>, RepositoryError> {
        debug!("Sending request");
        self.talks(CampQuery::TalksByMoniker {
            moniker: moniker.to_string(),
            include_speaker,
        })
        .await
    }

    #[instrument(skip(self))]
    async fn get_talk(&self, moniker: &str, talk_id: TalkId, include_speaker: bool) -> Result<Option<Talk>, RepositoryError> {
        debug!("Sending request");
        let query = CampQuery::Talk {
            moniker: moniker.to_string(),
            talk_id,
            include_speaker,
        };
        match self.client.query(query).await? {
            CampOutput::Talk(talk) => Ok(talk),
            _ => Err(RepositoryError::UnexpectedOutput("a talk lookup")),
        }
    }

    #[instrument(skip(self))]
    async fn get_speaker(&self, speaker_id: SpeakerId) -> Result<Option<Speaker>, RepositoryError> {
        debug!("Sending request");
        match self.client.query(CampQuery::Speaker { speaker_id }).await? {
            CampOutput::Speaker(speaker) => Ok(speaker),
            _ => Err(RepositoryError::UnexpectedOutput("a speaker lookup")),
        }
    }

    fn stage_add(&mut self, record: Record) {
        self.staged.push(match record {
            Record::Camp(camp) => CampMutation::InsertCamp(camp),
            Record::Talk(talk) => CampMutation::InsertTalk(talk),
        });
    }

    fn stage_update(&mut self, record: Record) {
        self.staged.push(match record {
            Record::Camp(camp) => CampMutation::UpdateCamp(camp),
            Record::Talk(talk) => CampMutation::UpdateTalk(talk),
        });
    }

    fn stage_delete(&mut self, record: Record) {
        let mutation = match record {
            Record::Camp(Camp { id: Some(id), .. }) => CampMutation::DeleteCamp(id),
            Record::Talk(Talk { id: Some(id), .. }) => CampMutation::DeleteTalk(id),
            unsaved => {
                warn!(?unsaved, "Ignoring delete of an entity that was never saved");
                return;
            }
        };
        self.staged.push(mutation);
    }

    fn staged(&self) -> usize {
        self.staged.len()
    }

    #[instrument(skip(self))]
    async fn commit(&mut self) -> Result<bool, RepositoryError> {
        self.committed.clear();
        if self.staged.is_empty() {
            debug!("Nothing staged");
            return Ok(false);
        }

        let batch = std::mem::take(&mut self.staged);
        debug!(mutations = batch.len(), "Sending request");
        let receipts = self.client.commit(batch).await?;
        let rows: usize = receipts.iter().map(|r| r.rows).sum();
        self.committed = receipts.into_iter().filter_map(|r| r.key).collect();

        debug!(rows, "Committed");
        Ok(rows > 0)
    }

    fn committed_keys(&self) -> &[RecordKey] {
        &self.committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CampId, SpeakerId};
    use crate::store;
    use entity_store::mock::MockStore;
    use entity_store::{Applied, StoreError};

    fn spawn_seeded() -> StoreRepository {
        let (actor, client) = store::new(8, CampDb::seeded().unwrap());
        tokio::spawn(actor.run());
        StoreRepository::new(client)
    }

    #[tokio::test]
    async fn test_commit_without_stage_is_false() {
        let mut repo = spawn_seeded();
        assert!(!repo.commit().await.unwrap());
    }

    #[tokio::test]
    async fn test_staged_add_is_invisible_until_commit() {
        let mut repo = spawn_seeded();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        repo.stage_add(Record::Camp(Camp::new("Conf1", "C1", date, 2)));

        assert!(repo.get_camp("C1").await.unwrap().is_none());
        assert!(repo.commit().await.unwrap());
        assert_eq!(repo.committed_keys(), &[RecordKey::Camp(CampId(2))]);
        assert!(repo.get_camp("C1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_units_of_work_do_not_share_stages() {
        let first = spawn_seeded();
        let mut second = first.unit_of_work();
        let camp = first.get_camp("ATL2018").await.unwrap().unwrap();

        second.stage_delete(Record::Camp(camp));
        assert_eq!(first.staged(), 0);
        assert_eq!(second.staged(), 1);
    }

    #[tokio::test]
    async fn test_zero_rows_commit_is_false() {
        let mut repo = spawn_seeded();
        let mut ghost = Camp::new("Ghost", "G", Camp::unscheduled_date(), 1);
        ghost.id = Some(CampId(77));
        repo.stage_delete(Record::Camp(ghost));
        assert!(!repo.commit().await.unwrap());
    }

    #[tokio::test]
    async fn test_store_failure_is_an_error() {
        let mut mock = MockStore::<CampDb>::new();
        mock.expect_query()
            .return_ok(CampOutput::Speaker(Some(Speaker::new(SpeakerId(1), "Shawn", "Wildermuth"))));
        mock.expect_commit().return_err(StoreError::Schema("disk full".into()));
        mock.expect_commit().return_ok(vec![Applied::none()]);

        let mut repo = StoreRepository::new(mock.client());
        assert!(repo.get_speaker(SpeakerId(1)).await.unwrap().is_some());

        repo.stage_update(Record::Talk(Talk::new("T", "A", 100)));
        assert!(matches!(repo.commit().await, Err(RepositoryError::Store(_))));

        repo.stage_update(Record::Talk(Talk::new("T", "A", 100)));
        assert!(!repo.commit().await.unwrap());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_output_is_reported() {
        let mut mock = MockStore::<CampDb>::new();
        mock.expect_query().return_ok(CampOutput::Talks(vec![]));

        let repo = StoreRepository::new(mock.client());
        assert!(matches!(
            repo.get_camp("ATL2018").await,
            Err(RepositoryError::UnexpectedOutput(_))
        ));
    }
}
