use crate::shapes::{in_range, max_length, required, required_text, SpeakerShape, ValidationError};
use serde::{Deserialize, Serialize};

/// External shape of a talk.
///
/// `talk_id` is output-only: it is filled in on the way out and ignored on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkShape {
    #[serde(alias = "TalkId")]
    pub talk_id: Option<u32>,
    #[serde(alias = "Title")]
    pub title: Option<String>,
    #[serde(alias = "Abstract", rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(alias = "Level")]
    pub level: Option<u32>,
    #[serde(alias = "Speaker")]
    pub speaker: Option<SpeakerShape>,
}

impl TalkShape {
    pub const TITLE_MAX: usize = 100;
    pub const ABSTRACT_MAX: usize = 4000;
    pub const LEVEL_MIN: u32 = 100;
    pub const LEVEL_MAX: u32 = 500;

    pub fn validate_for_create(&self) -> Result<(), ValidationError> {
        required_text("Title", &self.title)?;
        required_text("Abstract", &self.abstract_text)?;
        required("Level", &self.level)?;
        self.validate_present_fields()
    }

    pub fn validate_for_update(&self) -> Result<(), ValidationError> {
        if self.title.is_some() {
            required_text("Title", &self.title)?;
        }
        if self.abstract_text.is_some() {
            required_text("Abstract", &self.abstract_text)?;
        }
        self.validate_present_fields()
    }

    fn validate_present_fields(&self) -> Result<(), ValidationError> {
        max_length("Title", &self.title, Self::TITLE_MAX)?;
        max_length("Abstract", &self.abstract_text, Self::ABSTRACT_MAX)?;
        in_range("Level", self.level, Self::LEVEL_MIN, Self::LEVEL_MAX)
    }

    /// The speaker this submission points at, if any.
    pub fn speaker_id(&self) -> Option<u32> {
        self.speaker.as_ref().map(|s| s.speaker_id)
    }
}
