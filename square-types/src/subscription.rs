use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Money;

/// A merchant's subscription to an application.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Subscription {
    pub id: String,
    pub merchant_id: String,
    pub plan_id: String,
    /// E.g. active or canceled.
    pub status: String,
    pub payment_method: String,
    pub fee_base_money: Money,
    /// The date the subscription most recently became active.
    pub service_start_date: Option<NaiveDate>,
    /// Payment history, newest first. Not populated by the list endpoint.
    pub fees: Vec<SubscriptionFee>,
}

/// A single fee charged to a merchant for a subscription.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SubscriptionFee {
    pub fee_date: Option<NaiveDate>,
    /// `PENDING` or `PAID`.
    pub fee_status: String,
    pub fee_base_money: Money,
    pub fee_tax_money: Money,
    /// Always `fee_base_money + fee_tax_money`.
    pub fee_total_money: Money,
}

/// An application subscription plan.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    pub country_code: String,
    pub fee_base_money: Money,
}
