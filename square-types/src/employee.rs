use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Device, Money};

/// One of a business's employees.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Currently at most one role per employee.
    pub role_ids: Vec<String>,
    /// Locations the employee is allowed to clock in at.
    pub authorized_location_ids: Vec<String>,
    /// Settable only at creation time; the Connect API cannot edit it later.
    pub email: String,
    /// `ACTIVE` or `INACTIVE`; managed from the merchant dashboard.
    pub status: String,
    /// Merchant-assigned ID linking the employee to an external system.
    pub external_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A role that can be assigned to employees, granting a set of permissions.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EmployeeRole {
    pub id: String,
    pub name: String,
    pub permissions: Vec<String>,
    /// If true, the role carries all permissions regardless of
    /// `permissions`.
    pub is_owner: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A timecard for an employee; each corresponds to a single shift.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Timecard {
    pub id: String,
    pub employee_id: String,
    /// True if the merchant deleted the timecard.
    pub deleted: bool,
    pub clockin_time: String,
    pub clockout_time: String,
    pub clockin_location_id: String,
    pub clockout_location_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// An action performed on a timecard, such as a clock-in or an API edit.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TimecardEvent {
    pub id: String,
    /// E.g. `CLOCKIN` or `API_CREATE`.
    pub event_type: String,
    pub clockin_time: String,
    pub clockout_time: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// All cash drawer activity during a single shift.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CashDrawerShift {
    pub id: String,
    /// `OPEN`, `ENDED`, or `CLOSED`.
    pub cash_drawer_state: String,
    pub opened_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub employee_ids: Vec<String>,
    pub opening_employee_id: String,
    pub ending_employee_id: String,
    pub closing_employee_id: String,
    pub description: String,
    pub starting_cash_money: Money,
    pub cash_payment_money: Money,
    /// Always negative or zero.
    pub cash_refunds_money: Money,
    pub cash_paid_in_money: Money,
    pub cash_paid_out_money: Money,
    pub expected_cash_money: Money,
    pub closed_cash_money: Money,
    pub device: Device,
    /// Not populated by the list endpoint; retrieve a single shift to get
    /// its events.
    pub events: Vec<CashDrawerEvent>,
}

/// An event that opened the cash drawer during a shift.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CashDrawerEvent {
    pub id: String,
    pub employee_id: String,
    /// E.g. `CASH_TENDER_PAYMENT` or `CASH_TENDER_REFUND`.
    pub event_type: String,
    pub event_money: Money,
    pub created_at: Option<DateTime<Utc>>,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateEmployeeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateRoleRequest {
    pub name: String,
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateTimecardRequest {
    pub employee_id: String,
    /// ISO 8601; defaults to the current time upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockin_time: Option<String>,
    /// Provide only when importing timecards from another system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockout_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockin_location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockout_location_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateTimecardRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockin_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockout_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockin_location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockout_location_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::CreateEmployeeRequest;

    #[test]
    fn request_serialization_skips_unset_fields() {
        let req = CreateEmployeeRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..CreateEmployeeRequest::default()
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"first_name": "Ada", "last_name": "Lovelace"})
        );
    }
}
