/// Where a camp takes place. Owned by its camp; has no identity of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub venue_name: String,
    pub address1: String,
    pub address2: String,
    pub address3: String,
    pub city_town: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
}
