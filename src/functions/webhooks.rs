//! Per-location webhook notification preferences. Signature validation for
//! inbound notifications lives in [`crate::webhooks`].
use ureq::{http::Method, Agent};

use crate::{
    batch::BatchRequest,
    client::execute_request,
    APIResult, NextPage, SquareContext,
};

/// Lists which types of events trigger webhook notifications for a
/// location, e.g. `PAYMENT_UPDATED`.
pub fn list_webhooks(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
) -> APIResult<(Vec<String>, Option<NextPage>)> {
    execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/webhooks"),
        None::<&()>,
    )
}

/// Sets which types of events trigger webhook notifications for a location.
/// The request body is exactly the array of desired event types.
pub fn update_webhooks(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    event_types: &[String],
) -> APIResult<Vec<String>> {
    let (enabled, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/{location_id}/webhooks"),
        Some(&event_types),
    )?;
    Ok(enabled)
}

/// Batch descriptor equivalent of [`list_webhooks`].
#[must_use]
pub fn list_webhooks_batch(access_token: &str, location_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/{location_id}/webhooks"), access_token)
}

/// Batch descriptor equivalent of [`update_webhooks`].
pub fn update_webhooks_batch(
    access_token: &str,
    location_id: &str,
    event_types: &[String],
) -> APIResult<BatchRequest> {
    BatchRequest::put(format!("/v1/{location_id}/webhooks"), access_token, &event_types)
}
