use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Device, Money};

/// A payment taken by a Square merchant.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Payment {
    pub id: String,
    pub merchant_id: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Can differ from `merchant_id` when mobile staff took the payment.
    pub creator_id: String,
    pub device: Device,
    /// Detail page in the merchant dashboard; requires a signed-in merchant.
    pub payment_url: String,
    /// For split tender payments this is the first tender's receipt; the
    /// others hang off [`Tender::receipt_url`].
    pub receipt_url: String,
    pub inclusive_tax_money: Money,
    pub additive_tax_money: Money,
    /// Always `inclusive_tax_money + additive_tax_money`.
    pub tax_money: Money,
    pub tip_money: Money,
    /// Always zero or negative.
    pub discount_money: Money,
    pub total_collected_money: Money,
    /// Always zero or negative.
    pub processing_fee_money: Money,
    /// `total_collected_money + processing_fee_money`.
    pub net_total_money: Money,
    pub refunded_money: Money,
    pub inclusive_tax: Vec<PaymentTax>,
    pub additive_tax: Vec<PaymentTax>,
    pub tender: Vec<Tender>,
    pub refunds: Vec<Refund>,
    pub itemizations: Vec<PaymentItemization>,
}

/// A single tax applied to a payment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PaymentTax {
    pub name: String,
    pub applied_money: Money,
    /// Decimal rate as a string; `"0.07"` is 7%.
    pub rate: String,
    /// `ADDITIVE` or `INCLUSIVE`.
    pub inclusion_type: String,
    /// Missing for taxes applied by very old Square Register versions.
    pub fee_id: String,
}

/// A discount applied to an itemization in a payment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PaymentDiscount {
    pub name: String,
    /// Always negative or zero.
    pub applied_money: Money,
    pub discount_id: String,
}

/// A modifier option applied to an itemization in a payment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PaymentModifier {
    pub name: String,
    pub applied_money: Money,
    pub modifier_option_id: String,
}

/// Details of an item purchased in a payment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PaymentItemDetail {
    pub category_name: String,
    pub sku: String,
    pub item_id: String,
    pub item_variation_id: String,
}

/// An item, custom amount, or other entity purchased as part of a payment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PaymentItemization {
    pub name: String,
    /// Can be fractional, e.g. items sold by weight.
    pub quantity: f64,
    /// `ITEM`, `CUSTOM_AMOUNT`, ...
    pub itemization_type: String,
    pub item_detail: PaymentItemDetail,
    pub notes: String,
    pub item_variation_name: String,
    pub total_money: Money,
    pub single_quantity_money: Money,
    pub gross_sales_money: Money,
    /// Always negative or zero.
    pub discount_money: Money,
    /// `gross_sales_money + discount_money`.
    pub net_sales_money: Money,
    pub taxes: Vec<PaymentTax>,
    pub discounts: Vec<PaymentDiscount>,
    pub modifiers: Vec<PaymentModifier>,
}

/// A form and amount of tender provided for a payment. Split tender payments
/// carry several of these.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Tender {
    pub id: String,
    #[serde(rename = "type")]
    pub tender_type: String,
    pub name: String,
    /// Present only when the merchant had employee management enabled at the
    /// time of the payment.
    pub employee_id: String,
    pub receipt_url: String,
    /// Only for `CREDIT_CARD` tenders.
    pub card_brand: String,
    /// Only for `CREDIT_CARD` tenders.
    pub pan_suffix: String,
    pub entry_method: String,
    pub payment_note: String,
    pub total_money: Money,
    pub tendered_money: Money,
    pub change_back_money: Money,
    /// Always negative or zero.
    pub refunded_money: Money,
}

/// A refund initiated by a Square merchant.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Refund {
    /// `FULL` or `PARTIAL`.
    #[serde(rename = "type")]
    pub refund_type: String,
    pub reason: String,
    /// Always negative.
    pub refunded_money: Money,
    pub created_at: Option<DateTime<Utc>>,
    pub processed_at: Option<DateTime<Utc>>,
    pub payment_id: String,
}

/// A deposit or withdrawal made by Square to a merchant's bank account.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settlement {
    pub id: String,
    pub status: String,
    pub initiated_at: Option<DateTime<Utc>>,
    pub bank_account_id: String,
    /// Positive for a deposit, negative for a withdrawal, never zero.
    pub total_money: Money,
    /// Not populated by the list endpoint; retrieve a single settlement to
    /// get its entries.
    pub entries: Vec<SettlementEntry>,
}

/// A single entry in a settlement.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SettlementEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub payment_id: String,
    pub amount_money: Money,
    /// Already applied to `amount_money`; always negative or zero.
    pub fee_money: Money,
}

/// A merchant's bank account.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BankAccount {
    pub id: String,
    pub merchant_id: String,
    pub bank_name: String,
    pub name: String,
    /// E.g. savings or checking.
    #[serde(rename = "type")]
    pub account_type: String,
    pub routing_number: String,
    #[serde(rename = "account_numberSuffix")]
    pub account_number_suffix: String,
    pub currency_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateRefundRequest {
    /// For a `PARTIAL` refund of a split tender payment, the id of the
    /// tender to refund rather than the payment id.
    pub payment_id: String,
    /// `FULL` or `PARTIAL`.
    #[serde(rename = "type")]
    pub refund_type: String,
    pub reason: String,
    /// Required (and negative) only for `PARTIAL` refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_money: Option<Money>,
    /// Makes a repeated `PARTIAL` refund request safe to retry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_idempotence_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Payment;

    #[test]
    fn payment_with_renamed_fields_decodes() {
        let payment: Payment = serde_json::from_str(
            r#"{
              "id": "pay1",
              "merchant_id": "m1",
              "created_at": "2026-08-01T12:30:00Z",
              "total_collected_money": {"amount": 1500, "currency_code": "USD"},
              "tender": [{"id": "t1", "type": "CREDIT_CARD", "pan_suffix": "1111"}],
              "itemizations": [{"name": "Espresso", "quantity": 2.0}]
            }"#,
        )
        .unwrap();
        assert_eq!(payment.total_collected_money.amount, 1500);
        assert_eq!(payment.tender[0].tender_type, "CREDIT_CARD");
        assert!((payment.itemizations[0].quantity - 2.0).abs() < f64::EPSILON);
        assert!(payment.created_at.is_some());
    }
}
