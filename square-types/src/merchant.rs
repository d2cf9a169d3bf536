use serde::{Deserialize, Serialize};

use crate::{GlobalAddress, PhoneNumber};

/// A Square merchant account. The same shape describes a business account
/// and each of its locations.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Merchant {
    pub id: String,
    pub name: String,
    pub email: String,
    /// `LOCATION` for a single-location account, `BUSINESS` for a business
    /// account. Almost always `LOCATION`.
    pub account_type: String,
    /// Capabilities enabled for the account; currently only
    /// `CREDIT_CARD_PROCESSING` exists.
    pub account_capabilities: Vec<String>,
    pub country_code: String,
    /// BCP 47 language tag.
    pub language_code: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
    pub business_name: String,
    pub business_address: Option<GlobalAddress>,
    pub business_phone: Option<PhoneNumber>,
    pub business_type: String,
    pub shipping_address: Option<GlobalAddress>,
    /// Only present on single-location accounts that belong to a business
    /// account.
    pub location_details: Option<MerchantLocationDetails>,
    pub market_url: String,
}

/// Details a parent business account attaches to one of its locations.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MerchantLocationDetails {
    pub nickname: String,
}

#[cfg(test)]
mod tests {
    use super::Merchant;

    #[test]
    fn partial_payload_decodes_with_defaults() {
        let merchant: Merchant = serde_json::from_str(
            r#"{
              "id": "m1",
              "name": "Coffee & Toffee",
              "account_capabilities": ["CREDIT_CARD_PROCESSING"],
              "business_address": {"locality": "Lisbon", "country_code": "PT"}
            }"#,
        )
        .unwrap();
        assert_eq!(merchant.id, "m1");
        assert_eq!(merchant.account_capabilities.len(), 1);
        assert_eq!(merchant.business_address.unwrap().locality, "Lisbon");
        assert!(merchant.location_details.is_none());
        assert_eq!(merchant.market_url, "");
    }
}
