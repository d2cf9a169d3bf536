//! Employees, roles, timecards, and cash drawer shifts, all rooted under
//! `/v1/me` except for shifts, which are per-location.
use square_types::{
    CashDrawerShift, CreateEmployeeRequest, CreateRoleRequest, CreateTimecardRequest, Employee,
    EmployeeRole, Timecard, TimecardEvent, UpdateEmployeeRequest, UpdateRoleRequest,
    UpdateTimecardRequest,
};
use ureq::{http::Method, Agent};

use super::push_pair;
use crate::{
    batch::BatchRequest,
    client::{append_query, execute_delete, execute_request},
    APIResult, NextPage, SquareContext,
};

/// Filters accepted by [`list_employees`]. Upstream allows at most one of
/// the time-range filters per call.
#[derive(Debug, Clone, Default)]
pub struct ListEmployeesParams {
    /// `ASC` or `DESC` by creation time.
    pub order: Option<String>,
    pub begin_updated_at: Option<String>,
    pub end_updated_at: Option<String>,
    pub begin_created_at: Option<String>,
    pub end_created_at: Option<String>,
    /// `ACTIVE` or `INACTIVE`.
    pub status: Option<String>,
    pub external_id: Option<String>,
    pub limit: Option<usize>,
}

impl ListEmployeesParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "order", self.order.as_ref());
        push_pair(&mut pairs, "begin_updated_at", self.begin_updated_at.as_ref());
        push_pair(&mut pairs, "end_updated_at", self.end_updated_at.as_ref());
        push_pair(&mut pairs, "begin_created_at", self.begin_created_at.as_ref());
        push_pair(&mut pairs, "end_created_at", self.end_created_at.as_ref());
        push_pair(&mut pairs, "status", self.status.as_ref());
        push_pair(&mut pairs, "external_id", self.external_id.as_ref());
        push_pair(&mut pairs, "limit", self.limit.as_ref());
        pairs
    }
}

/// Filters accepted by [`list_roles`].
#[derive(Debug, Clone, Default)]
pub struct ListRolesParams {
    pub order: Option<String>,
    pub limit: Option<usize>,
}

impl ListRolesParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "order", self.order.as_ref());
        push_pair(&mut pairs, "limit", self.limit.as_ref());
        pairs
    }
}

/// Filters accepted by [`list_timecards`].
#[derive(Debug, Clone, Default)]
pub struct ListTimecardsParams {
    pub order: Option<String>,
    pub employee_id: Option<String>,
    pub begin_clockin_time: Option<String>,
    pub end_clockin_time: Option<String>,
    pub begin_clockout_time: Option<String>,
    pub end_clockout_time: Option<String>,
    pub begin_updated_at: Option<String>,
    pub end_updated_at: Option<String>,
    /// Include timecards the merchant has deleted.
    pub deleted: Option<bool>,
    pub limit: Option<usize>,
}

impl ListTimecardsParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "order", self.order.as_ref());
        push_pair(&mut pairs, "employee_id", self.employee_id.as_ref());
        push_pair(&mut pairs, "begin_clockin_time", self.begin_clockin_time.as_ref());
        push_pair(&mut pairs, "end_clockin_time", self.end_clockin_time.as_ref());
        push_pair(&mut pairs, "begin_clockout_time", self.begin_clockout_time.as_ref());
        push_pair(&mut pairs, "end_clockout_time", self.end_clockout_time.as_ref());
        push_pair(&mut pairs, "begin_updated_at", self.begin_updated_at.as_ref());
        push_pair(&mut pairs, "end_updated_at", self.end_updated_at.as_ref());
        push_pair(&mut pairs, "deleted", self.deleted.as_ref());
        push_pair(&mut pairs, "limit", self.limit.as_ref());
        pairs
    }
}

/// Filters accepted by [`list_cash_drawer_shifts`]. The date range cannot
/// exceed 90 days upstream.
#[derive(Debug, Clone, Default)]
pub struct ListCashDrawerShiftsParams {
    pub begin_time: Option<String>,
    pub end_time: Option<String>,
    pub order: Option<String>,
}

impl ListCashDrawerShiftsParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "begin_time", self.begin_time.as_ref());
        push_pair(&mut pairs, "end_time", self.end_time.as_ref());
        push_pair(&mut pairs, "order", self.order.as_ref());
        pairs
    }
}

/// Creates an employee for a business.
pub fn create_employee(
    ctx: &SquareContext,
    client: &Agent,
    req: &CreateEmployeeRequest,
) -> APIResult<Employee> {
    let (employee, _) = execute_request(ctx, client, Method::POST, "/v1/me/employees", Some(req))?;
    Ok(employee)
}

/// Provides summary information for all of a business's employees.
pub fn list_employees(
    ctx: &SquareContext,
    client: &Agent,
    params: &ListEmployeesParams,
) -> APIResult<(Vec<Employee>, Option<NextPage>)> {
    let path = append_query("/v1/me/employees".to_string(), &params.to_query());
    execute_request(ctx, client, Method::GET, &path, None::<&()>)
}

/// Provides the details for a single employee.
pub fn retrieve_employee(
    ctx: &SquareContext,
    client: &Agent,
    employee_id: &str,
) -> APIResult<Employee> {
    let (employee, _) = execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/me/employees/{employee_id}"),
        None::<&()>,
    )?;
    Ok(employee)
}

/// Modifies the details of an employee.
pub fn update_employee(
    ctx: &SquareContext,
    client: &Agent,
    employee_id: &str,
    req: &UpdateEmployeeRequest,
) -> APIResult<Employee> {
    let (employee, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/me/employees/{employee_id}"),
        Some(req),
    )?;
    Ok(employee)
}

/// Creates an employee role you can then assign to employees.
pub fn create_role(
    ctx: &SquareContext,
    client: &Agent,
    req: &CreateRoleRequest,
) -> APIResult<EmployeeRole> {
    let (role, _) = execute_request(ctx, client, Method::POST, "/v1/me/roles", Some(req))?;
    Ok(role)
}

/// Provides summary information for all of a business's employee roles.
pub fn list_roles(
    ctx: &SquareContext,
    client: &Agent,
    params: &ListRolesParams,
) -> APIResult<(Vec<EmployeeRole>, Option<NextPage>)> {
    let path = append_query("/v1/me/roles".to_string(), &params.to_query());
    execute_request(ctx, client, Method::GET, &path, None::<&()>)
}

/// Provides the details for a single employee role.
pub fn retrieve_role(ctx: &SquareContext, client: &Agent, role_id: &str) -> APIResult<EmployeeRole> {
    let (role, _) = execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/me/roles/{role_id}"),
        None::<&()>,
    )?;
    Ok(role)
}

/// Modifies the details of an employee role.
pub fn update_role(
    ctx: &SquareContext,
    client: &Agent,
    role_id: &str,
    req: &UpdateRoleRequest,
) -> APIResult<EmployeeRole> {
    let (role, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/me/roles/{role_id}"),
        Some(req),
    )?;
    Ok(role)
}

/// Creates a timecard for an employee; each corresponds to a single shift.
/// The upstream records an `API_CREATE` event for the new timecard.
pub fn create_timecard(
    ctx: &SquareContext,
    client: &Agent,
    req: &CreateTimecardRequest,
) -> APIResult<Timecard> {
    let (timecard, _) = execute_request(ctx, client, Method::POST, "/v1/me/timecards", Some(req))?;
    Ok(timecard)
}

/// Provides summary information for all of a business's employee timecards.
pub fn list_timecards(
    ctx: &SquareContext,
    client: &Agent,
    params: &ListTimecardsParams,
) -> APIResult<(Vec<Timecard>, Option<NextPage>)> {
    let path = append_query("/v1/me/timecards".to_string(), &params.to_query());
    execute_request(ctx, client, Method::GET, &path, None::<&()>)
}

pub fn retrieve_timecard(
    ctx: &SquareContext,
    client: &Agent,
    timecard_id: &str,
) -> APIResult<Timecard> {
    let (timecard, _) = execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/me/timecards/{timecard_id}"),
        None::<&()>,
    )?;
    Ok(timecard)
}

/// Modifies a timecard's details. The upstream records an `API_EDIT` event.
pub fn update_timecard(
    ctx: &SquareContext,
    client: &Agent,
    timecard_id: &str,
    req: &UpdateTimecardRequest,
) -> APIResult<Timecard> {
    let (timecard, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/me/timecards/{timecard_id}"),
        Some(req),
    )?;
    Ok(timecard)
}

pub fn delete_timecard(ctx: &SquareContext, client: &Agent, timecard_id: &str) -> APIResult<()> {
    execute_delete(ctx, client, &format!("/v1/me/timecards/{timecard_id}"))
}

/// Provides summary information for all events associated with a timecard.
pub fn list_timecard_events(
    ctx: &SquareContext,
    client: &Agent,
    timecard_id: &str,
) -> APIResult<(Vec<TimecardEvent>, Option<NextPage>)> {
    execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/me/timecards/{timecard_id}/events"),
        None::<&()>,
    )
}

/// Provides the details for a location's cash drawer shifts in a date range.
///
/// Shifts returned here omit the `events` field; retrieve a single shift to
/// get its events.
pub fn list_cash_drawer_shifts(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    params: &ListCashDrawerShiftsParams,
) -> APIResult<(Vec<CashDrawerShift>, Option<NextPage>)> {
    let path = append_query(
        format!("/v1/{location_id}/cash-drawer-shifts"),
        &params.to_query(),
    );
    execute_request(ctx, client, Method::GET, &path, None::<&()>)
}

/// Provides the details for a single cash drawer shift, including all events
/// that occurred during it.
pub fn retrieve_cash_drawer_shift(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    shift_id: &str,
) -> APIResult<CashDrawerShift> {
    let (shift, _) = execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/cash-drawer-shifts/{shift_id}"),
        None::<&()>,
    )?;
    Ok(shift)
}

/// Batch descriptor equivalent of [`create_employee`].
pub fn create_employee_batch(
    access_token: &str,
    req: &CreateEmployeeRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::post("/v1/me/employees", access_token, req)
}

/// Batch descriptor equivalent of [`list_employees`].
#[must_use]
pub fn list_employees_batch(access_token: &str, params: &ListEmployeesParams) -> BatchRequest {
    BatchRequest::get(
        append_query("/v1/me/employees".to_string(), &params.to_query()),
        access_token,
    )
}

/// Batch descriptor equivalent of [`retrieve_employee`].
#[must_use]
pub fn retrieve_employee_batch(access_token: &str, employee_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/me/employees/{employee_id}"), access_token)
}

/// Batch descriptor equivalent of [`update_employee`].
pub fn update_employee_batch(
    access_token: &str,
    employee_id: &str,
    req: &UpdateEmployeeRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(format!("/v1/me/employees/{employee_id}"), access_token, req)
}

/// Batch descriptor equivalent of [`create_role`].
pub fn create_role_batch(access_token: &str, req: &CreateRoleRequest) -> APIResult<BatchRequest> {
    BatchRequest::post("/v1/me/roles", access_token, req)
}

/// Batch descriptor equivalent of [`list_roles`].
#[must_use]
pub fn list_roles_batch(access_token: &str, params: &ListRolesParams) -> BatchRequest {
    BatchRequest::get(
        append_query("/v1/me/roles".to_string(), &params.to_query()),
        access_token,
    )
}

/// Batch descriptor equivalent of [`retrieve_role`].
#[must_use]
pub fn retrieve_role_batch(access_token: &str, role_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/me/roles/{role_id}"), access_token)
}

/// Batch descriptor equivalent of [`update_role`].
pub fn update_role_batch(
    access_token: &str,
    role_id: &str,
    req: &UpdateRoleRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(format!("/v1/me/roles/{role_id}"), access_token, req)
}

/// Batch descriptor equivalent of [`create_timecard`].
pub fn create_timecard_batch(
    access_token: &str,
    req: &CreateTimecardRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::post("/v1/me/timecards", access_token, req)
}

/// Batch descriptor equivalent of [`list_timecards`].
#[must_use]
pub fn list_timecards_batch(access_token: &str, params: &ListTimecardsParams) -> BatchRequest {
    BatchRequest::get(
        append_query("/v1/me/timecards".to_string(), &params.to_query()),
        access_token,
    )
}

/// Batch descriptor equivalent of [`retrieve_timecard`].
#[must_use]
pub fn retrieve_timecard_batch(access_token: &str, timecard_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/me/timecards/{timecard_id}"), access_token)
}

/// Batch descriptor equivalent of [`update_timecard`].
pub fn update_timecard_batch(
    access_token: &str,
    timecard_id: &str,
    req: &UpdateTimecardRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(format!("/v1/me/timecards/{timecard_id}"), access_token, req)
}

/// Batch descriptor equivalent of [`delete_timecard`].
#[must_use]
pub fn delete_timecard_batch(access_token: &str, timecard_id: &str) -> BatchRequest {
    BatchRequest::delete(format!("/v1/me/timecards/{timecard_id}"), access_token)
}

/// Batch descriptor equivalent of [`list_timecard_events`].
#[must_use]
pub fn list_timecard_events_batch(access_token: &str, timecard_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/me/timecards/{timecard_id}/events"), access_token)
}

/// Batch descriptor equivalent of [`list_cash_drawer_shifts`].
#[must_use]
pub fn list_cash_drawer_shifts_batch(
    access_token: &str,
    location_id: &str,
    params: &ListCashDrawerShiftsParams,
) -> BatchRequest {
    BatchRequest::get(
        append_query(
            format!("/v1/{location_id}/cash-drawer-shifts"),
            &params.to_query(),
        ),
        access_token,
    )
}

/// Batch descriptor equivalent of [`retrieve_cash_drawer_shift`].
#[must_use]
pub fn retrieve_cash_drawer_shift_batch(
    access_token: &str,
    location_id: &str,
    shift_id: &str,
) -> BatchRequest {
    BatchRequest::get(
        format!("/v1/{location_id}/cash-drawer-shifts/{shift_id}"),
        access_token,
    )
}

#[cfg(test)]
mod tests {
    use super::{list_employees_batch, ListEmployeesParams, ListTimecardsParams};

    #[test]
    fn unset_filters_produce_no_query_string() {
        let descriptor = list_employees_batch("tok", &ListEmployeesParams::default());
        assert_eq!(descriptor.relative_path, "/v1/me/employees");
    }

    #[test]
    fn set_filters_render_in_declaration_order() {
        let params = ListEmployeesParams {
            order: Some("DESC".to_string()),
            status: Some("ACTIVE".to_string()),
            limit: Some(50),
            ..ListEmployeesParams::default()
        };
        let descriptor = list_employees_batch("tok", &params);
        assert_eq!(
            descriptor.relative_path,
            "/v1/me/employees?order=DESC&status=ACTIVE&limit=50"
        );
    }

    #[test]
    fn boolean_filters_render_lowercase() {
        let params = ListTimecardsParams {
            deleted: Some(true),
            ..ListTimecardsParams::default()
        };
        let rendered = params.to_query();
        assert_eq!(rendered, vec![("deleted", "true".to_string())]);
    }
}
