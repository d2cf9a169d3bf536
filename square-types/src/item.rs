use serde::{Deserialize, Serialize};

use crate::Money;

/// A merchant's item.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    /// `NORMAL` for almost all items.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Present only when set to something other than the default.
    pub abbreviation: String,
    pub color: String,
    /// `PUBLIC` or `PRIVATE` in the merchant's online store.
    pub visibility: String,
    pub available_online: bool,
    pub master_image: Option<ItemImage>,
    pub category: Option<Category>,
    pub variations: Vec<ItemVariation>,
    pub modifier_lists: Vec<ModifierList>,
    pub fees: Vec<Fee>,
    /// Deprecated upstream; never used.
    pub taxable: bool,
}

/// An image of an item.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ItemImage {
    pub id: String,
    pub url: String,
}

/// A variation of an item. Every item has at least one.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ItemVariation {
    pub id: String,
    pub name: String,
    pub item_id: String,
    /// List position in Square Register; ties sort alphabetically.
    pub ordinal: i64,
    /// `FIXED_PRICING` or variable at the time of sale.
    pub pricing_type: String,
    pub price_money: Option<Money>,
    pub sku: String,
    pub track_inventory: bool,
    pub inventory_alert_type: String,
    pub inventory_alert_threshold: i64,
    /// Arbitrary metadata, at most 255 characters.
    pub user_data: String,
}

/// An item category.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A discount applicable to a payment, either a percentage rate or a flat
/// amount; exactly one of `rate` and `amount_money` is meaningful.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Discount {
    pub id: String,
    pub name: String,
    /// Decimal rate as a string; `"0.07"` is 7%.
    pub rate: String,
    pub amount_money: Option<Money>,
    /// `FIXED`, or entered at the time of sale.
    pub discount_type: String,
    pub pin_required: bool,
    pub color: String,
}

/// A tax or other fee applicable to a payment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Fee {
    pub id: String,
    pub name: String,
    /// Decimal rate as a string; `"0.07"` is 7%.
    pub rate: String,
    pub calculation_phase: String,
    /// Currently `TAX` for all fees.
    pub adjustment_type: String,
    pub applies_to_custom_amounts: bool,
    pub enabled: bool,
    /// `ADDITIVE` or `INCLUSIVE`.
    pub inclusion_type: String,
    /// Sales tax classification; currently relevant only to Canadian
    /// merchants.
    #[serde(rename = "type")]
    pub fee_type: String,
}

/// An item modifier list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ModifierList {
    pub id: String,
    pub name: String,
    /// Whether `MULTIPLE` options or a `SINGLE` option can apply to one
    /// item.
    pub selection_type: String,
    pub modifier_options: Vec<ModifierOption>,
}

/// An item modifier option.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ModifierOption {
    pub id: String,
    pub name: String,
    pub price_money: Option<Money>,
    /// Default option of a `SINGLE`-selection modifier list.
    pub on_by_default: bool,
    pub ordinal: i64,
    pub modifier_list_id: String,
}

/// Inventory information for one of a merchant's item variations.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InventoryEntry {
    pub variation_id: String,
    pub quantity_on_hand: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateItemRequest {
    /// Optional caller-chosen id; must be unique among all ids ever used by
    /// the merchant, and can never be reused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_online: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_for_pickup: Option<bool>,
    /// At least one variation is required.
    pub variations: Vec<ItemVariation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The empty string removes any existing category association.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_online: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_for_pickup: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateVariationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_inventory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_alert_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_alert_threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateVariationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_inventory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_alert_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_alert_threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AdjustInventoryRequest {
    /// Negative for `SALE`, positive for `RECEIVE_STOCK`.
    pub quantity_delta: i64,
    pub adjustment_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateModifierListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_type: Option<String>,
    /// At least one option is required.
    pub modifier_options: Vec<ModifierOption>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateModifierListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateModifierOptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_by_default: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateModifierOptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_by_default: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateCategoryRequest {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateDiscountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// For rate-based discounts only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    /// For amount-based discounts only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateDiscountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateFeeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub rate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation_phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to_custom_amounts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusion_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateFeeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation_phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to_custom_amounts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusion_type: Option<String>,
}
