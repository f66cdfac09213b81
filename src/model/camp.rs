use crate::model::{Location, Talk};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned identifier for Camps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CampId(pub u32);

impl Display for CampId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A software-conference event.
///
/// The `moniker` is the natural key: globally unique and fixed once the camp is created.
/// `talks` is only populated when a query asked for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Camp {
    /// `None` until the store has persisted the camp.
    pub id: Option<CampId>,
    pub name: String,
    pub moniker: String,
    pub event_date: NaiveDate,
    /// Duration in days.
    pub length: u32,
    pub location: Location,
    pub talks: Vec<Talk>,
}

impl Camp {
    /// Creates an unsaved camp with an empty location and no talks.
    pub fn new(name: impl Into<String>, moniker: impl Into<String>, event_date: NaiveDate, length: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            moniker: moniker.into(),
            event_date,
            length,
            location: Location::default(),
            talks: Vec::new(),
        }
    }

    /// Event date used when a client does not supply one (`0001-01-01`).
    pub fn unscheduled_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or_default()
    }
}
