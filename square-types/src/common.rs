use serde::{Deserialize, Serialize};

/// An amount of money. When sent in a request, `currency_code` must match
/// the currency of the merchant's Square account.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Money {
    /// The amount in the smallest unit of the currency (cents for USD).
    pub amount: i64,
    /// ISO 4217 currency code, e.g. `USD`.
    pub currency_code: String,
}

/// Geographic coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A generic representation of a physical address.
///
/// The `address_line_*` fields carry the most specific details (street
/// number, street name, building); city, region, and country live in the
/// dedicated fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GlobalAddress {
    pub address_line_1: String,
    pub address_line_2: String,
    pub address_line_3: String,
    pub address_line_4: String,
    pub address_line_5: String,
    pub locality: String,
    pub sublocality: String,
    pub sublocality_1: String,
    pub sublocality_2: String,
    pub sublocality_3: String,
    pub sublocality_4: String,
    pub sublocality_5: String,
    /// In the United States, the state.
    pub administrative_district_level_1: String,
    /// In the United States, the county.
    pub administrative_district_level_2: String,
    pub administrative_district_level_3: String,
    pub postal_code: String,
    /// ISO 3166-1-alpha-2 country code.
    pub country_code: String,
    pub address_coordinates: Option<Coordinates>,
}

/// A phone number split into international calling code and local number.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PhoneNumber {
    /// For US numbers, `+1`.
    pub calling_code: String,
    pub number: String,
}

/// A device running Square Register.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Device {
    pub id: String,
    pub name: String,
}
