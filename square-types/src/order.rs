use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{GlobalAddress, Money, Tender};

/// An order from a merchant's online store.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Order {
    pub id: String,
    /// Current state, such as `OPEN` or `COMPLETED`.
    pub state: String,
    pub buyer_email: String,
    pub recipient_name: String,
    pub recipient_phone_number: String,
    pub shipping_address: Option<GlobalAddress>,
    /// Before taxes and shipping.
    pub subtotal_money: Money,
    pub total_shipping_money: Money,
    pub total_tax_money: Money,
    pub total_price_money: Money,
    pub total_discount_money: Money,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// When the order expires if no action is taken.
    pub expires_at: Option<DateTime<Utc>>,
    pub payment_id: String,
    pub buyer_note: String,
    pub completed_note: String,
    pub refunded_note: String,
    pub canceled_note: String,
    pub tender: Option<Tender>,
    pub order_history: Vec<OrderHistoryEntry>,
    pub promo_code: String,
    /// For Bitcoin transactions, the receiving address.
    pub btc_receive_address: String,
    /// For Bitcoin transactions, the order price in satoshi.
    pub btc_price_satoshi: i64,
}

/// A prior action performed on an online store order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct OrderHistoryEntry {
    pub action: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateOrderRequest {
    /// `COMPLETE`, `CANCEL`, or `REFUND`.
    pub action: String,
    /// Only valid when `action` is `COMPLETE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipped_tracking_number: Option<String>,
    /// Only valid when `action` is `COMPLETE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_note: Option<String>,
    /// Only valid when `action` is `REFUND`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_note: Option<String>,
    /// Only valid when `action` is `CANCEL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled_note: Option<String>,
}
