use square_types::{Order, UpdateOrderRequest};
use ureq::{http::Method, Agent};

use super::push_pair;
use crate::{
    batch::BatchRequest,
    client::{append_query, execute_request},
    APIResult, NextPage, SquareContext,
};

/// Filters accepted by [`list_orders`].
#[derive(Debug, Clone, Default)]
pub struct ListOrdersParams {
    pub limit: Option<usize>,
    pub order: Option<String>,
}

impl ListOrdersParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "limit", self.limit.as_ref());
        push_pair(&mut pairs, "order", self.order.as_ref());
        pairs
    }
}

/// Provides summary information for a location's online store orders.
pub fn list_orders(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    params: &ListOrdersParams,
) -> APIResult<(Vec<Order>, Option<NextPage>)> {
    let path = append_query(format!("/v1/{location_id}/orders"), &params.to_query());
    execute_request(ctx, client, Method::GET, &path, None::<&()>)
}

/// Provides comprehensive information for a single online store order.
pub fn retrieve_order(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    order_id: &str,
) -> APIResult<Order> {
    let (order, _) = execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/orders/{order_id}"),
        None::<&()>,
    )?;
    Ok(order)
}

/// Completes, cancels, or refunds an online store order.
pub fn update_order(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    order_id: &str,
    req: &UpdateOrderRequest,
) -> APIResult<Order> {
    let (order, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/{location_id}/orders/{order_id}"),
        Some(req),
    )?;
    Ok(order)
}

/// Batch descriptor equivalent of [`list_orders`].
#[must_use]
pub fn list_orders_batch(
    access_token: &str,
    location_id: &str,
    params: &ListOrdersParams,
) -> BatchRequest {
    BatchRequest::get(
        append_query(format!("/v1/{location_id}/orders"), &params.to_query()),
        access_token,
    )
}

/// Batch descriptor equivalent of [`retrieve_order`].
#[must_use]
pub fn retrieve_order_batch(access_token: &str, location_id: &str, order_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/{location_id}/orders/{order_id}"), access_token)
}

/// Batch descriptor equivalent of [`update_order`].
pub fn update_order_batch(
    access_token: &str,
    location_id: &str,
    order_id: &str,
    req: &UpdateOrderRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(format!("/v1/{location_id}/orders/{order_id}"), access_token, req)
}
