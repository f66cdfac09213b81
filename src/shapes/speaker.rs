use serde::{Deserialize, Serialize};

/// External shape of a speaker.
///
/// Inside a talk submission only `speaker_id` matters: it names the speaker to associate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerShape {
    #[serde(alias = "SpeakerId", default)]
    pub speaker_id: u32,
    #[serde(alias = "FirstName")]
    pub first_name: Option<String>,
    #[serde(alias = "MiddleName")]
    pub middle_name: Option<String>,
    #[serde(alias = "LastName")]
    pub last_name: Option<String>,
    #[serde(alias = "Company")]
    pub company: Option<String>,
    #[serde(alias = "CompanyUrl")]
    pub company_url: Option<String>,
    #[serde(alias = "BlogUrl")]
    pub blog_url: Option<String>,
    #[serde(alias = "Twitter")]
    pub twitter: Option<String>,
    #[serde(alias = "GitHub")]
    pub git_hub: Option<String>,
}
