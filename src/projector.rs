//! # Projector
//!
//! Field-by-field correspondence between internal entities and external shapes.
//!
//! Each entity pair gets one [`Mapping`] impl on [`Projector`], which makes the whole table
//! visible (and checked) at compile time:
//!
//! | Internal | External | Notes |
//! |----------|----------|-------|
//! | [`Camp`] | [`CampShape`] | `id` never leaves; `moniker` is not overlaid by `merge`; `talks` mapped element-wise |
//! | [`Talk`] | [`TalkShape`] | `talk_id` is output-only; speaker becomes a reference on the way in |
//! | [`Speaker`] | [`SpeakerShape`] | |
//! | [`Location`] | [`LocationShape`] | |
//!
//! ## Operations
//!
//! - **to_external**: read-only snapshot for a response body.
//! - **to_internal**: builds a *new* entity. It never carries a store identifier, so use it
//!   only for entities about to be inserted.
//! - **merge**: overlays the fields present in a shape onto an already-persisted entity,
//!   keeping its identity and every field the shape leaves out.

use crate::model::{Camp, Location, Speaker, SpeakerId, Talk};
use crate::shapes::{CampShape, LocationShape, SpeakerShape, TalkShape};

/// Bidirectional mapping between an entity `E` and its external shape `S`.
pub trait Mapping<E, S> {
    fn to_external(&self, entity: &E) -> S;
    fn to_internal(&self, shape: &S) -> E;
    fn merge(&self, shape: &S, entity: &mut E);
}

/// Stateless holder of every [`Mapping`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Projector;

impl Projector {
    pub fn new() -> Self {
        Self
    }

    /// Projects every entity of a collection.
    pub fn to_external_all<E, S>(&self, entities: &[E]) -> Vec<S>
    where
        Self: Mapping<E, S>,
    {
        entities.iter().map(|e| self.to_external(e)).collect()
    }
}

fn overlay<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

impl Mapping<Camp, CampShape> for Projector {
    fn to_external(&self, camp: &Camp) -> CampShape {
        CampShape {
            name: Some(camp.name.clone()),
            moniker: Some(camp.moniker.clone()),
            event_date: Some(camp.event_date),
            length: Some(camp.length),
            location: Some(self.to_external(&camp.location)),
            talks: Some(self.to_external_all(&camp.talks)),
        }
    }

    fn to_internal(&self, shape: &CampShape) -> Camp {
        Camp {
            id: None,
            name: shape.name.clone().unwrap_or_default(),
            moniker: shape.moniker.clone().unwrap_or_default(),
            event_date: shape.event_date.unwrap_or_else(Camp::unscheduled_date),
            length: shape.length.unwrap_or(CampShape::LENGTH_MIN),
            location: shape
                .location
                .as_ref()
                .map(|l| -> Location { self.to_internal(l) })
                .unwrap_or_default(),
            talks: shape
                .talks
                .iter()
                .flatten()
                .map(|t| -> Talk { self.to_internal(t) })
                .collect(),
        }
    }

    fn merge(&self, shape: &CampShape, camp: &mut Camp) {
        overlay(&mut camp.name, &shape.name);
        overlay(&mut camp.event_date, &shape.event_date);
        overlay(&mut camp.length, &shape.length);
        if let Some(location) = &shape.location {
            self.merge(location, &mut camp.location);
        }
    }
}

impl Mapping<Talk, TalkShape> for Projector {
    fn to_external(&self, talk: &Talk) -> TalkShape {
        let speaker = match (&talk.speaker, talk.speaker_id) {
            (Some(speaker), _) => Some(self.to_external(speaker)),
            (None, Some(id)) => Some(SpeakerShape {
                speaker_id: id.0,
                ..SpeakerShape::default()
            }),
            (None, None) => None,
        };
        TalkShape {
            talk_id: talk.id.map(|id| id.0),
            title: Some(talk.title.clone()),
            abstract_text: Some(talk.abstract_text.clone()),
            level: Some(talk.level),
            speaker,
        }
    }

    fn to_internal(&self, shape: &TalkShape) -> Talk {
        let mut talk = Talk::new(
            shape.title.clone().unwrap_or_default(),
            shape.abstract_text.clone().unwrap_or_default(),
            shape.level.unwrap_or_default(),
        );
        talk.speaker_id = shape.speaker_id().map(SpeakerId);
        talk
    }

    fn merge(&self, shape: &TalkShape, talk: &mut Talk) {
        overlay(&mut talk.title, &shape.title);
        overlay(&mut talk.abstract_text, &shape.abstract_text);
        overlay(&mut talk.level, &shape.level);
    }
}

impl Mapping<Speaker, SpeakerShape> for Projector {
    fn to_external(&self, speaker: &Speaker) -> SpeakerShape {
        SpeakerShape {
            speaker_id: speaker.id.0,
            first_name: Some(speaker.first_name.clone()),
            middle_name: Some(speaker.middle_name.clone()),
            last_name: Some(speaker.last_name.clone()),
            company: Some(speaker.company.clone()),
            company_url: Some(speaker.company_url.clone()),
            blog_url: Some(speaker.blog_url.clone()),
            twitter: Some(speaker.twitter.clone()),
            git_hub: Some(speaker.git_hub.clone()),
        }
    }

    fn to_internal(&self, shape: &SpeakerShape) -> Speaker {
        let mut speaker = Speaker {
            id: SpeakerId(shape.speaker_id),
            ..Speaker::default()
        };
        self.merge(shape, &mut speaker);
        speaker
    }

    fn merge(&self, shape: &SpeakerShape, speaker: &mut Speaker) {
        overlay(&mut speaker.first_name, &shape.first_name);
        overlay(&mut speaker.middle_name, &shape.middle_name);
        overlay(&mut speaker.last_name, &shape.last_name);
        overlay(&mut speaker.company, &shape.company);
        overlay(&mut speaker.company_url, &shape.company_url);
        overlay(&mut speaker.blog_url, &shape.blog_url);
        overlay(&mut speaker.twitter, &shape.twitter);
        overlay(&mut speaker.git_hub, &shape.git_hub);
    }
}

impl Mapping<Location, LocationShape> for Projector {
    fn to_external(&self, location: &Location) -> LocationShape {
        LocationShape {
            venue_name: Some(location.venue_name.clone()),
            address1: Some(location.address1.clone()),
            address2: Some(location.address2.clone()),
            address3: Some(location.address3.clone()),
            city_town: Some(location.city_town.clone()),
            state_province: Some(location.state_province.clone()),
            postal_code: Some(location.postal_code.clone()),
            country: Some(location.country.clone()),
        }
    }

    fn to_internal(&self, shape: &LocationShape) -> Location {
        let mut location = Location::default();
        self.merge(shape, &mut location);
        location
    }

    fn merge(&self, shape: &LocationShape, location: &mut Location) {
        overlay(&mut location.venue_name, &shape.venue_name);
        overlay(&mut location.address1, &shape.address1);
        overlay(&mut location.address2, &shape.address2);
        overlay(&mut location.address3, &shape.address3);
        overlay(&mut location.city_town, &shape.city_town);
        overlay(&mut location.state_province, &shape.state_province);
        overlay(&mut location.postal_code, &shape.postal_code);
        overlay(&mut location.country, &shape.country);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CampId, TalkId};
    use chrono::NaiveDate;

    fn stored_camp() -> Camp {
        let mut camp = Camp::new("Atlanta Code Camp", "ATL2018", NaiveDate::from_ymd_opt(2018, 10, 18).unwrap(), 1);
        camp.id = Some(CampId(7));
        camp.location.venue_name = "Atlanta Convention Center".into();
        camp.location.city_town = "Atlanta".into();
        camp
    }

    #[test]
    fn test_merge_overlays_only_present_fields() {
        let projector = Projector::new();
        let mut camp = stored_camp();
        let patch = CampShape {
            name: Some("X".into()),
            location: Some(LocationShape {
                city_town: Some("Savannah".into()),
                ..LocationShape::default()
            }),
            ..CampShape::default()
        };

        projector.merge(&patch, &mut camp);

        assert_eq!(camp.name, "X");
        assert_eq!(camp.id, Some(CampId(7)));
        assert_eq!(camp.event_date, NaiveDate::from_ymd_opt(2018, 10, 18).unwrap());
        assert_eq!(camp.length, 1);
        assert_eq!(camp.location.venue_name, "Atlanta Convention Center");
        assert_eq!(camp.location.city_town, "Savannah");
    }

    #[test]
    fn test_merge_never_rewrites_moniker() {
        let projector = Projector::new();
        let mut camp = stored_camp();
        let patch = CampShape {
            moniker: Some("OTHER".into()),
            ..CampShape::default()
        };
        projector.merge(&patch, &mut camp);
        assert_eq!(camp.moniker, "ATL2018");
    }

    #[test]
    fn test_to_internal_defaults_and_carries_no_id() {
        let projector = Projector::new();
        let shape = CampShape {
            name: Some("Conf1".into()),
            moniker: Some("C1".into()),
            ..CampShape::default()
        };
        let camp: Camp = projector.to_internal(&shape);
        assert_eq!(camp.id, None);
        assert_eq!(camp.length, 1);
        assert_eq!(camp.event_date, Camp::unscheduled_date());
        assert_eq!(camp.location, Location::default());
    }

    #[test]
    fn test_talks_are_mapped_element_wise() {
        let projector = Projector::new();
        let mut camp = stored_camp();
        let mut talk = Talk::new("Entity Framework From Scratch", "Working with EF is fun", 100);
        talk.id = Some(TalkId(3));
        talk.assign_speaker(Speaker::new(SpeakerId(1), "Shawn", "Wildermuth"));
        camp.talks.push(talk);

        let shape: CampShape = projector.to_external(&camp);
        let talks = shape.talks.unwrap();
        assert_eq!(talks.len(), 1);
        assert_eq!(talks[0].talk_id, Some(3));
        assert_eq!(talks[0].speaker.as_ref().unwrap().first_name.as_deref(), Some("Shawn"));
    }

    #[test]
    fn test_unloaded_speaker_projects_as_reference() {
        let projector = Projector::new();
        let mut talk = Talk::new("T", "A", 200);
        talk.speaker_id = Some(SpeakerId(2));

        let shape: TalkShape = projector.to_external(&talk);
        let speaker = shape.speaker.unwrap();
        assert_eq!(speaker.speaker_id, 2);
        assert_eq!(speaker.first_name, None);
    }
}
