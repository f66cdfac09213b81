use crate::shapes::{in_range, max_length, required_text, LocationShape, TalkShape, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// External shape of a camp.
///
/// The moniker stands in for the store identifier, which is never exposed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampShape {
    #[serde(alias = "Name")]
    pub name: Option<String>,
    #[serde(alias = "Moniker")]
    pub moniker: Option<String>,
    #[serde(alias = "EventDate")]
    pub event_date: Option<NaiveDate>,
    #[serde(alias = "Length")]
    pub length: Option<u32>,
    #[serde(alias = "Location")]
    pub location: Option<LocationShape>,
    #[serde(alias = "Talks")]
    pub talks: Option<Vec<TalkShape>>,
}

impl CampShape {
    pub const NAME_MAX: usize = 100;
    pub const LENGTH_MIN: u32 = 1;
    pub const LENGTH_MAX: u32 = 100;

    /// Constraints for a brand-new camp: name and moniker must be present.
    pub fn validate_for_create(&self) -> Result<(), ValidationError> {
        required_text("Name", &self.name)?;
        required_text("Moniker", &self.moniker)?;
        self.validate_present_fields()
    }

    /// Constraints for a partial update: only the fields present are checked.
    pub fn validate_for_update(&self) -> Result<(), ValidationError> {
        if self.name.is_some() {
            required_text("Name", &self.name)?;
        }
        self.validate_present_fields()
    }

    fn validate_present_fields(&self) -> Result<(), ValidationError> {
        max_length("Name", &self.name, Self::NAME_MAX)?;
        in_range("Length", self.length, Self::LENGTH_MIN, Self::LENGTH_MAX)?;
        for talk in self.talks.iter().flatten() {
            talk.validate_for_create()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, moniker: &str) -> CampShape {
        CampShape {
            name: Some(name.into()),
            moniker: Some(moniker.into()),
            ..CampShape::default()
        }
    }

    #[test]
    fn test_create_requires_name_and_moniker() {
        assert!(named("Conf", "C1").validate_for_create().is_ok());

        let missing_moniker = CampShape {
            name: Some("Conf".into()),
            ..CampShape::default()
        };
        assert_eq!(
            missing_moniker.validate_for_create(),
            Err(ValidationError("The Moniker field is required.".into()))
        );
        assert!(named("  ", "C1").validate_for_create().is_err());
    }

    #[test]
    fn test_length_and_name_limits() {
        let mut shape = named("Conf", "C1");
        shape.length = Some(0);
        assert!(shape.validate_for_create().is_err());
        shape.length = Some(100);
        assert!(shape.validate_for_create().is_ok());
        shape.length = Some(101);
        assert!(shape.validate_for_create().is_err());

        let long = named(&"x".repeat(101), "C1");
        assert!(long.validate_for_create().is_err());
    }

    #[test]
    fn test_update_checks_only_present_fields() {
        let patch = CampShape {
            name: Some("X".into()),
            ..CampShape::default()
        };
        assert!(patch.validate_for_update().is_ok());
        assert!(CampShape::default().validate_for_update().is_ok());
    }

    #[test]
    fn test_accepts_pascal_case_input() {
        let json = r#"{"Name":"Conf1","Moniker":"C1","EventDate":"2024-01-01","Length":2}"#;
        let shape: CampShape = serde_json::from_str(json).unwrap();
        assert_eq!(shape.moniker.as_deref(), Some("C1"));
        assert_eq!(shape.event_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(shape.length, Some(2));
        assert!(shape.location.is_none());
    }
}
