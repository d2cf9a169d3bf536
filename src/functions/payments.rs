//! Payments, settlements, refunds, and bank accounts, all per-location.
//! Date ranges on the list endpoints cannot exceed one year upstream.
use square_types::{BankAccount, CreateRefundRequest, Payment, Refund, Settlement};
use ureq::{http::Method, Agent};

use super::push_pair;
use crate::{
    batch::BatchRequest,
    client::{append_query, execute_request},
    APIResult, NextPage, SquareContext,
};

/// Filters accepted by [`list_payments`].
#[derive(Debug, Clone, Default)]
pub struct ListPaymentsParams {
    pub begin_time: Option<String>,
    pub end_time: Option<String>,
    pub order: Option<String>,
    pub limit: Option<usize>,
}

impl ListPaymentsParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "begin_time", self.begin_time.as_ref());
        push_pair(&mut pairs, "end_time", self.end_time.as_ref());
        push_pair(&mut pairs, "order", self.order.as_ref());
        push_pair(&mut pairs, "limit", self.limit.as_ref());
        pairs
    }
}

/// Filters accepted by [`list_settlements`].
#[derive(Debug, Clone, Default)]
pub struct ListSettlementsParams {
    pub begin_time: Option<String>,
    pub end_time: Option<String>,
    pub order: Option<String>,
    pub limit: Option<usize>,
    /// `SENT` or `FAILED`.
    pub status: Option<String>,
}

impl ListSettlementsParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "begin_time", self.begin_time.as_ref());
        push_pair(&mut pairs, "end_time", self.end_time.as_ref());
        push_pair(&mut pairs, "order", self.order.as_ref());
        push_pair(&mut pairs, "limit", self.limit.as_ref());
        push_pair(&mut pairs, "status", self.status.as_ref());
        pairs
    }
}

/// Filters accepted by [`list_refunds`].
#[derive(Debug, Clone, Default)]
pub struct ListRefundsParams {
    pub begin_time: Option<String>,
    pub end_time: Option<String>,
    pub order: Option<String>,
    pub limit: Option<usize>,
}

impl ListRefundsParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "begin_time", self.begin_time.as_ref());
        push_pair(&mut pairs, "end_time", self.end_time.as_ref());
        push_pair(&mut pairs, "order", self.order.as_ref());
        push_pair(&mut pairs, "limit", self.limit.as_ref());
        pairs
    }
}

/// Provides summary information for all payments taken by a merchant or any
/// of the merchant's mobile staff during a date range.
pub fn list_payments(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    params: &ListPaymentsParams,
) -> APIResult<(Vec<Payment>, Option<NextPage>)> {
    let path = append_query(format!("/v1/{location_id}/payments"), &params.to_query());
    execute_request(ctx, client, Method::GET, &path, None::<&()>)
}

/// Provides comprehensive information for a single payment.
pub fn retrieve_payment(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    payment_id: &str,
) -> APIResult<Payment> {
    let (payment, _) = execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/payments/{payment_id}"),
        None::<&()>,
    )?;
    Ok(payment)
}

/// Provides summary information for all deposits and withdrawals initiated
/// by Square to a merchant's bank account during a date range.
///
/// Settlements returned here omit the `entries` field; retrieve a single
/// settlement to get its entries.
pub fn list_settlements(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    params: &ListSettlementsParams,
) -> APIResult<(Vec<Settlement>, Option<NextPage>)> {
    let path = append_query(format!("/v1/{location_id}/settlements"), &params.to_query());
    execute_request(ctx, client, Method::GET, &path, None::<&()>)
}

/// Provides comprehensive information for a single settlement, including the
/// entries that contribute to its total.
pub fn retrieve_settlement(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    settlement_id: &str,
) -> APIResult<Settlement> {
    let (settlement, _) = execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/settlements/{settlement_id}"),
        None::<&()>,
    )?;
    Ok(settlement)
}

/// Issues a refund for a previously processed payment. Refunds must be
/// issued within 60 days of the payment, and card refunds are not
/// reversible.
pub fn create_refund(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    req: &CreateRefundRequest,
) -> APIResult<Refund> {
    let (refund, _) = execute_request(
        ctx,
        client,
        Method::POST,
        &format!("/v1/{location_id}/refunds"),
        Some(req),
    )?;
    Ok(refund)
}

/// Provides the details for all refunds initiated by a merchant or any of
/// the merchant's mobile staff during a date range.
pub fn list_refunds(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    params: &ListRefundsParams,
) -> APIResult<(Vec<Refund>, Option<NextPage>)> {
    let path = append_query(format!("/v1/{location_id}/refunds"), &params.to_query());
    execute_request(ctx, client, Method::GET, &path, None::<&()>)
}

/// Provides non-confidential details for all of a location's associated bank
/// accounts.
pub fn list_bank_accounts(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
) -> APIResult<(Vec<BankAccount>, Option<NextPage>)> {
    execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/bank-accounts"),
        None::<&()>,
    )
}

/// Provides non-confidential details for a single bank account.
pub fn retrieve_bank_account(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    bank_account_id: &str,
) -> APIResult<BankAccount> {
    let (account, _) = execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/bank-accounts/{bank_account_id}"),
        None::<&()>,
    )?;
    Ok(account)
}

/// Batch descriptor equivalent of [`list_payments`].
#[must_use]
pub fn list_payments_batch(
    access_token: &str,
    location_id: &str,
    params: &ListPaymentsParams,
) -> BatchRequest {
    BatchRequest::get(
        append_query(format!("/v1/{location_id}/payments"), &params.to_query()),
        access_token,
    )
}

/// Batch descriptor equivalent of [`retrieve_payment`].
#[must_use]
pub fn retrieve_payment_batch(
    access_token: &str,
    location_id: &str,
    payment_id: &str,
) -> BatchRequest {
    BatchRequest::get(format!("/v1/{location_id}/payments/{payment_id}"), access_token)
}

/// Batch descriptor equivalent of [`list_settlements`].
#[must_use]
pub fn list_settlements_batch(
    access_token: &str,
    location_id: &str,
    params: &ListSettlementsParams,
) -> BatchRequest {
    BatchRequest::get(
        append_query(format!("/v1/{location_id}/settlements"), &params.to_query()),
        access_token,
    )
}

/// Batch descriptor equivalent of [`retrieve_settlement`].
#[must_use]
pub fn retrieve_settlement_batch(
    access_token: &str,
    location_id: &str,
    settlement_id: &str,
) -> BatchRequest {
    BatchRequest::get(
        format!("/v1/{location_id}/settlements/{settlement_id}"),
        access_token,
    )
}

/// Batch descriptor equivalent of [`create_refund`].
pub fn create_refund_batch(
    access_token: &str,
    location_id: &str,
    req: &CreateRefundRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::post(format!("/v1/{location_id}/refunds"), access_token, req)
}

/// Batch descriptor equivalent of [`list_refunds`].
#[must_use]
pub fn list_refunds_batch(
    access_token: &str,
    location_id: &str,
    params: &ListRefundsParams,
) -> BatchRequest {
    BatchRequest::get(
        append_query(format!("/v1/{location_id}/refunds"), &params.to_query()),
        access_token,
    )
}

/// Batch descriptor equivalent of [`list_bank_accounts`].
#[must_use]
pub fn list_bank_accounts_batch(access_token: &str, location_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/{location_id}/bank-accounts"), access_token)
}

/// Batch descriptor equivalent of [`retrieve_bank_account`].
#[must_use]
pub fn retrieve_bank_account_batch(
    access_token: &str,
    location_id: &str,
    bank_account_id: &str,
) -> BatchRequest {
    BatchRequest::get(
        format!("/v1/{location_id}/bank-accounts/{bank_account_id}"),
        access_token,
    )
}

#[cfg(test)]
mod tests {
    use tiny_http::{Header, Response, Server};
    use ureq::Agent;

    use super::{list_payments, ListPaymentsParams};
    use crate::{Environment, SquareContext};

    #[test]
    fn list_payments_renders_filters_and_decodes_the_page() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let ctx = SquareContext::new(Environment::Sandbox, "tok".to_string())
            .with_base_url(format!("http://{addr}"));

        let handle = std::thread::spawn(move || {
            let request = server.recv().unwrap();
            let url = request.url().to_string();
            request
                .respond(
                    Response::from_string(
                        r#"[{"id": "pay1", "total_collected_money": {"amount": 250, "currency_code": "USD"}}]"#,
                    )
                    .with_header(
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
                    ),
                )
                .unwrap();
            url
        });

        let params = ListPaymentsParams {
            order: Some("ASC".to_string()),
            limit: Some(10),
            ..ListPaymentsParams::default()
        };
        let client = Agent::new_with_defaults();
        let (payments, next) = list_payments(&ctx, &client, "loc0", &params).unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].total_collected_money.amount, 250);
        assert!(next.is_none());
        assert_eq!(handle.join().unwrap(), "/v1/loc0/payments?order=ASC&limit=10");
    }
}
