use crate::model::{Camp, CampId, Speaker, SpeakerId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned identifier for Talks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TalkId(pub u32);

impl Display for TalkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A session given at a camp.
///
/// A talk is owned by exactly one camp and references exactly one speaker. Both links are
/// `None` only on a freshly projected talk that has not been attached yet. `speaker` is the
/// loaded association and is only filled in when a query asked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Talk {
    /// `None` until the store has persisted the talk.
    pub id: Option<TalkId>,
    pub camp_id: Option<CampId>,
    pub title: String,
    pub abstract_text: String,
    pub level: u32,
    pub speaker_id: Option<SpeakerId>,
    pub speaker: Option<Speaker>,
}

impl Talk {
    /// Creates an unsaved, unattached talk.
    pub fn new(title: impl Into<String>, abstract_text: impl Into<String>, level: u32) -> Self {
        Self {
            id: None,
            camp_id: None,
            title: title.into(),
            abstract_text: abstract_text.into(),
            level,
            speaker_id: None,
            speaker: None,
        }
    }

    /// Makes `camp` the owner of this talk.
    pub fn attach_to(&mut self, camp: &Camp) {
        self.camp_id = camp.id;
    }

    /// Points this talk at `speaker`, replacing any previous association.
    pub fn assign_speaker(&mut self, speaker: Speaker) {
        self.speaker_id = Some(speaker.id);
        self.speaker = Some(speaker);
    }
}
