//! Sample data for a fresh store.

use crate::model::{Camp, Location, Speaker, SpeakerId, Talk};
use crate::store::{CampDb, CampDbError, CampMutation};
use chrono::NaiveDate;
use entity_store::Schema;

impl CampDb {
    /// A store holding one camp (`ATL2018`) with two talks and the two speakers giving them.
    pub fn seeded() -> Result<Self, CampDbError> {
        let mut db = Self::new();

        db.insert_speaker(Speaker {
            id: SpeakerId(1),
            first_name: "Shawn".into(),
            last_name: "Wildermuth".into(),
            company: "Wilder Minds LLC".into(),
            company_url: "http://wilderminds.com".into(),
            blog_url: "http://wildermuth.com".into(),
            twitter: "shawnwildermuth".into(),
            git_hub: "shawnwildermuth".into(),
            ..Speaker::default()
        });
        db.insert_speaker(Speaker {
            id: SpeakerId(2),
            first_name: "Resa".into(),
            last_name: "Wildermuth".into(),
            company: "Wilder Minds LLC".into(),
            company_url: "http://wilderminds.com".into(),
            blog_url: "http://shawnandresa.com".into(),
            twitter: "resawildermuth".into(),
            git_hub: "resawildermuth".into(),
            ..Speaker::default()
        });

        let event_date = NaiveDate::from_ymd_opt(2018, 10, 18).unwrap_or_else(Camp::unscheduled_date);
        let mut camp = Camp::new("Atlanta Code Camp", "ATL2018", event_date, 1);
        camp.location = Location {
            venue_name: "Atlanta Convention Center".into(),
            address1: "123 Main Street".into(),
            city_town: "Atlanta".into(),
            state_province: "GA".into(),
            postal_code: "12345".into(),
            country: "USA".into(),
            ..Location::default()
        };

        let mut first = Talk::new(
            "Entity Framework From Scratch",
            "Working with Entity Framework is a lot of fun",
            100,
        );
        first.speaker_id = Some(SpeakerId(1));
        let mut second = Talk::new(
            "Writing Sample Data Made Easy",
            "Thinking of good sample data examples is tiring.",
            200,
        );
        second.speaker_id = Some(SpeakerId(2));
        camp.talks = vec![first, second];

        db.apply(CampMutation::InsertCamp(camp))?;
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_contents() {
        let db = CampDb::seeded().unwrap();
        assert_eq!(db.camp_count(), 1);
        assert_eq!(db.talk_count(), 2);
    }
}
