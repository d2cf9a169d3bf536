//! Application subscriptions and plans.
//!
//! These live under `/oauth2/clients/...`, so the transport authenticates
//! them with the `Client` scheme; construct the [`SquareContext`] with the
//! application secret as its access token.
use square_types::{Subscription, SubscriptionPlan};
use ureq::{http::Method, Agent};

use super::push_pair;
use crate::{
    batch::BatchRequest,
    client::{append_query, execute_request},
    APIResult, NextPage, SquareContext,
};

/// Filters accepted by [`list_subscriptions`].
#[derive(Debug, Clone, Default)]
pub struct ListSubscriptionsParams {
    /// Restrict to a single merchant's subscriptions.
    pub merchant_id: Option<String>,
    pub limit: Option<usize>,
}

impl ListSubscriptionsParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "merchant_id", self.merchant_id.as_ref());
        push_pair(&mut pairs, "limit", self.limit.as_ref());
        pairs
    }
}

/// Lists subscriptions that have been created for an application.
///
/// Subscriptions returned here omit the `fees` payment history; retrieve a
/// single subscription to get it.
pub fn list_subscriptions(
    ctx: &SquareContext,
    client: &Agent,
    client_id: &str,
    params: &ListSubscriptionsParams,
) -> APIResult<(Vec<Subscription>, Option<NextPage>)> {
    let path = append_query(
        format!("/oauth2/clients/{client_id}/subscriptions"),
        &params.to_query(),
    );
    execute_request(ctx, client, Method::GET, &path, None::<&()>)
}

/// Provides comprehensive information for a single subscription, including
/// its payment history.
pub fn retrieve_subscription(
    ctx: &SquareContext,
    client: &Agent,
    client_id: &str,
    subscription_id: &str,
) -> APIResult<Subscription> {
    let (subscription, _) = execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/oauth2/clients/{client_id}/subscriptions/{subscription_id}"),
        None::<&()>,
    )?;
    Ok(subscription)
}

/// Provides information for all of an application's subscription plans.
pub fn list_subscription_plans(
    ctx: &SquareContext,
    client: &Agent,
    client_id: &str,
) -> APIResult<(Vec<SubscriptionPlan>, Option<NextPage>)> {
    execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/oauth2/clients/{client_id}/plans"),
        None::<&()>,
    )
}

pub fn retrieve_subscription_plan(
    ctx: &SquareContext,
    client: &Agent,
    client_id: &str,
    plan_id: &str,
) -> APIResult<SubscriptionPlan> {
    let (plan, _) = execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/oauth2/clients/{client_id}/plans/{plan_id}"),
        None::<&()>,
    )?;
    Ok(plan)
}

/// Batch descriptor equivalent of [`list_subscriptions`].
#[must_use]
pub fn list_subscriptions_batch(
    access_token: &str,
    client_id: &str,
    params: &ListSubscriptionsParams,
) -> BatchRequest {
    BatchRequest::get(
        append_query(
            format!("/oauth2/clients/{client_id}/subscriptions"),
            &params.to_query(),
        ),
        access_token,
    )
}

/// Batch descriptor equivalent of [`retrieve_subscription`].
#[must_use]
pub fn retrieve_subscription_batch(
    access_token: &str,
    client_id: &str,
    subscription_id: &str,
) -> BatchRequest {
    BatchRequest::get(
        format!("/oauth2/clients/{client_id}/subscriptions/{subscription_id}"),
        access_token,
    )
}

/// Batch descriptor equivalent of [`list_subscription_plans`].
#[must_use]
pub fn list_subscription_plans_batch(access_token: &str, client_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/oauth2/clients/{client_id}/plans"), access_token)
}

/// Batch descriptor equivalent of [`retrieve_subscription_plan`].
#[must_use]
pub fn retrieve_subscription_plan_batch(
    access_token: &str,
    client_id: &str,
    plan_id: &str,
) -> BatchRequest {
    BatchRequest::get(format!("/oauth2/clients/{client_id}/plans/{plan_id}"), access_token)
}
