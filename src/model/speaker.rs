use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier for Speakers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpeakerId(pub u32);

impl Display for SpeakerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person who gives talks.
///
/// Speakers exist independently of camps and talks. The API only ever looks them up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speaker {
    pub id: SpeakerId,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub company: String,
    pub company_url: String,
    pub blog_url: String,
    pub twitter: String,
    pub git_hub: String,
}

impl Speaker {
    pub fn new(id: SpeakerId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }
}
