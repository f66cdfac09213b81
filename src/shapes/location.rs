use serde::{Deserialize, Serialize};

/// External shape of a camp's location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationShape {
    #[serde(alias = "VenueName")]
    pub venue_name: Option<String>,
    #[serde(alias = "Address1")]
    pub address1: Option<String>,
    #[serde(alias = "Address2")]
    pub address2: Option<String>,
    #[serde(alias = "Address3")]
    pub address3: Option<String>,
    #[serde(alias = "CityTown")]
    pub city_town: Option<String>,
    #[serde(alias = "StateProvince")]
    pub state_province: Option<String>,
    #[serde(alias = "PostalCode")]
    pub postal_code: Option<String>,
    #[serde(alias = "Country")]
    pub country: Option<String>,
}
