//! The camp data model as hosted by the entity store.
//!
//! Tables are keyed by store-assigned ids. Camps are stored without their talks and talks
//! without their loaded speaker; queries re-assemble those associations on request.

use crate::model::{Camp, CampId, Speaker, SpeakerId, Talk, TalkId};
use crate::store::CampDbError;
use chrono::NaiveDate;
use entity_store::{Applied, Schema};
use std::collections::BTreeMap;

/// Reads the camp store answers.
#[derive(Debug, Clone, PartialEq)]
pub enum CampQuery {
    AllCamps {
        include_talks: bool,
    },
    Camp {
        moniker: String,
        include_talks: bool,
    },
    CampsByEventDate {
        date: NaiveDate,
        include_talks: bool,
    },
    TalksByMoniker {
        moniker: String,
        include_speaker: bool,
    },
    Talk {
        moniker: String,
        talk_id: TalkId,
        include_speaker: bool,
    },
    Speaker {
        speaker_id: SpeakerId,
    },
}

/// Answers to [`CampQuery`].
#[derive(Debug, Clone, PartialEq)]
pub enum CampOutput {
    Camps(Vec<Camp>),
    Camp(Option<Camp>),
    Talks(Vec<Talk>),
    Talk(Option<Talk>),
    Speaker(Option<Speaker>),
}

/// Writes accepted by the camp store.
#[derive(Debug, Clone, PartialEq)]
pub enum CampMutation {
    /// Inserts a camp together with any talks it carries.
    InsertCamp(Camp),
    UpdateCamp(Camp),
    /// Deletes a camp and, by cascade, all of its talks.
    DeleteCamp(CampId),
    InsertTalk(Talk),
    UpdateTalk(Talk),
    DeleteTalk(TalkId),
}

/// Identifier handed back for an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKey {
    Camp(CampId),
    Talk(TalkId),
}

impl RecordKey {
    pub fn camp(self) -> Option<CampId> {
        match self {
            Self::Camp(id) => Some(id),
            Self::Talk(_) => None,
        }
    }

    pub fn talk(self) -> Option<TalkId> {
        match self {
            Self::Talk(id) => Some(id),
            Self::Camp(_) => None,
        }
    }
}

/// In-memory camp tables.
#[derive(Debug, Clone, Default)]
pub struct CampDb {
    camps: BTreeMap<CampId, Camp>,
    talks: BTreeMap<TalkId, Talk>,
    speakers: BTreeMap<SpeakerId, Speaker>,
    last_camp_id: u32,
    last_talk_id: u32,
}

/// Monikers compare case-insensitively, both for lookups and for uniqueness.
fn same_moniker(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

impl CampDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a speaker directly. Speakers are reference data and are not created through
    /// commits.
    pub fn insert_speaker(&mut self, speaker: Speaker) {
        self.speakers.insert(speaker.id, speaker);
    }

    pub fn camp_count(&self) -> usize {
        self.camps.len()
    }

    pub fn talk_count(&self) -> usize {
        self.talks.len()
    }

    fn find_camp(&self, moniker: &str) -> Option<&Camp> {
        self.camps.values().find(|c| same_moniker(&c.moniker, moniker))
    }

    fn load_talk(&self, talk: &Talk, include_speaker: bool) -> Talk {
        let mut talk = talk.clone();
        if include_speaker {
            talk.speaker = talk.speaker_id.and_then(|id| self.speakers.get(&id).cloned());
        }
        talk
    }

    fn talks_of(&self, camp_id: CampId, include_speaker: bool) -> Vec<Talk> {
        self.talks
            .values()
            .filter(|t| t.camp_id == Some(camp_id))
            .map(|t| self.load_talk(t, include_speaker))
            .collect()
    }

    fn load_camp(&self, camp: &Camp, include_talks: bool) -> Camp {
        let mut camp = camp.clone();
        if include_talks {
            if let Some(id) = camp.id {
                camp.talks = self.talks_of(id, true);
            }
        }
        camp
    }

    /// Camps matching `filter`, most recent event first.
    fn scan_camps(&self, include_talks: bool, filter: impl Fn(&Camp) -> bool) -> Vec<Camp> {
        let mut camps: Vec<Camp> = self
            .camps
            .values()
            .filter(|c| filter(c))
            .map(|c| self.load_camp(c, include_talks))
            .collect();
        camps.sort_by(|a, b| b.event_date.cmp(&a.event_date).then(a.id.cmp(&b.id)));
        camps
    }

    fn check_speaker(&self, talk: &Talk) -> Result<(), CampDbError> {
        match talk.speaker_id {
            Some(id) if !self.speakers.contains_key(&id) => Err(CampDbError::MissingSpeaker(id)),
            _ => Ok(()),
        }
    }

    fn insert_talk(&mut self, talk: Talk) -> Result<TalkId, CampDbError> {
        let camp_id = talk.camp_id.ok_or(CampDbError::Unattached)?;
        if !self.camps.contains_key(&camp_id) {
            return Err(CampDbError::MissingCamp(camp_id));
        }
        self.check_speaker(&talk)?;

        self.last_talk_id += 1;
        let id = TalkId(self.last_talk_id);
        let mut row = talk;
        row.id = Some(id);
        row.speaker = None;
        self.talks.insert(id, row);
        Ok(id)
    }

    fn insert_camp(&mut self, camp: Camp) -> Result<Applied<RecordKey>, CampDbError> {
        if self.find_camp(&camp.moniker).is_some() {
            return Err(CampDbError::DuplicateMoniker(camp.moniker));
        }

        self.last_camp_id += 1;
        let id = CampId(self.last_camp_id);
        let mut row = camp;
        row.id = Some(id);
        let talks = std::mem::take(&mut row.talks);
        self.camps.insert(id, row);

        let mut rows = 1;
        for mut talk in talks {
            talk.camp_id = Some(id);
            self.insert_talk(talk)?;
            rows += 1;
        }
        Ok(Applied::inserted(rows, RecordKey::Camp(id)))
    }

    fn update_camp(&mut self, camp: Camp) -> Result<Applied<RecordKey>, CampDbError> {
        let id = camp.id.ok_or(CampDbError::Unsaved("camp"))?;
        if !self.camps.contains_key(&id) {
            return Ok(Applied::none());
        }
        let clash = self
            .camps
            .values()
            .any(|c| c.id != Some(id) && same_moniker(&c.moniker, &camp.moniker));
        if clash {
            return Err(CampDbError::DuplicateMoniker(camp.moniker));
        }

        let mut row = camp;
        row.talks.clear();
        if self.camps.get(&id) == Some(&row) {
            return Ok(Applied::none());
        }
        self.camps.insert(id, row);
        Ok(Applied::rows(1))
    }

    fn delete_camp(&mut self, id: CampId) -> Applied<RecordKey> {
        if self.camps.remove(&id).is_none() {
            return Applied::none();
        }
        let before = self.talks.len();
        self.talks.retain(|_, t| t.camp_id != Some(id));
        Applied::rows(1 + before - self.talks.len())
    }

    fn update_talk(&mut self, talk: Talk) -> Result<Applied<RecordKey>, CampDbError> {
        let id = talk.id.ok_or(CampDbError::Unsaved("talk"))?;
        let Some(existing) = self.talks.get(&id) else {
            return Ok(Applied::none());
        };
        let camp_id = talk.camp_id.or(existing.camp_id);
        if let Some(camp_id) = camp_id {
            if !self.camps.contains_key(&camp_id) {
                return Err(CampDbError::MissingCamp(camp_id));
            }
        }
        self.check_speaker(&talk)?;

        let mut row = talk;
        row.camp_id = camp_id;
        row.speaker = None;
        if self.talks.get(&id) == Some(&row) {
            return Ok(Applied::none());
        }
        self.talks.insert(id, row);
        Ok(Applied::rows(1))
    }
}

impl Schema for CampDb {
    type Query = CampQuery;
    type Output = CampOutput;
    type Mutation = CampMutation;
    type Key = RecordKey;
    type Error = CampDbError;

    fn query(&self, query: CampQuery) -> Result<CampOutput, CampDbError> {
        Ok(match query {
            CampQuery::AllCamps { include_talks } => CampOutput::Camps(self.scan_camps(include_talks, |_| true)),
            CampQuery::Camp {
                moniker,
                include_talks,
            } => CampOutput::Camp(self.find_camp(&moniker).map(|c| self.load_camp(c, include_talks))),
            CampQuery::CampsByEventDate {
                date,
                include_talks,
            } => CampOutput::Camps(self.scan_camps(include_talks, |c| c.event_date == date)),
            CampQuery::TalksByMoniker {
                moniker,
                include_speaker,
            } => CampOutput::Talks(
                self.find_camp(&moniker)
                    .and_then(|c| c.id)
                    .map(|id| self.talks_of(id, include_speaker))
                    .unwrap_or_default(),
            ),
            CampQuery::Talk {
                moniker,
                talk_id,
                include_speaker,
            } => {
                let camp_id = self.find_camp(&moniker).and_then(|c| c.id);
                CampOutput::Talk(
                    self.talks
                        .get(&talk_id)
                        .filter(|t| camp_id.is_some() && t.camp_id == camp_id)
                        .map(|t| self.load_talk(t, include_speaker)),
                )
            }
            CampQuery::Speaker { speaker_id } => CampOutput::Speaker(self.speakers.get(&speaker_id).cloned()),
        })
    }

    fn apply(&mut self, mutation: CampMutation) -> Result<Applied<RecordKey>, CampDbError> {
        match mutation {
            CampMutation::InsertCamp(camp) => self.insert_camp(camp),
            CampMutation::UpdateCamp(camp) => self.update_camp(camp),
            CampMutation::DeleteCamp(id) => Ok(self.delete_camp(id)),
            CampMutation::InsertTalk(talk) => {
                let id = self.insert_talk(talk)?;
                Ok(Applied::inserted(1, RecordKey::Talk(id)))
            }
            CampMutation::UpdateTalk(talk) => self.update_talk(talk),
            CampMutation::DeleteTalk(id) => Ok(match self.talks.remove(&id) {
                Some(_) => Applied::rows(1),
                None => Applied::none(),
            }),
        }
    }
}
