//! Modifier lists and options, categories, discounts, and fees; the
//! per-location catalog surrounding items.
//!
//! The apply/remove association endpoints return no useful body for DELETE
//! (the upstream sends no content), so the `remove_*` wrappers return unit.
use square_types::{
    Category, CreateCategoryRequest, CreateDiscountRequest, CreateFeeRequest,
    CreateModifierListRequest, CreateModifierOptionRequest, Discount, Fee, Item, ModifierList,
    ModifierOption, UpdateCategoryRequest, UpdateDiscountRequest, UpdateFeeRequest,
    UpdateModifierListRequest, UpdateModifierOptionRequest,
};
use ureq::{http::Method, Agent};

use crate::{
    batch::BatchRequest,
    client::{execute_delete, execute_request},
    APIResult, NextPage, SquareContext,
};

/// Creates an item modifier list and at least one modifier option for it.
pub fn create_modifier_list(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    req: &CreateModifierListRequest,
) -> APIResult<ModifierList> {
    let (list, _) = execute_request(
        ctx,
        client,
        Method::POST,
        &format!("/v1/{location_id}/modifier-lists"),
        Some(req),
    )?;
    Ok(list)
}

/// Lists all of a location's modifier lists.
pub fn list_modifier_lists(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
) -> APIResult<(Vec<ModifierList>, Option<NextPage>)> {
    execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/modifier-lists"),
        None::<&()>,
    )
}

/// Provides the details for a single modifier list.
pub fn retrieve_modifier_list(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    modifier_list_id: &str,
) -> APIResult<ModifierList> {
    let (list, _) = execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/modifier-lists/{modifier_list_id}"),
        None::<&()>,
    )?;
    Ok(list)
}

/// Modifies the details of an existing modifier list. Individual options are
/// edited with [`update_modifier_option`].
pub fn update_modifier_list(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    modifier_list_id: &str,
    req: &UpdateModifierListRequest,
) -> APIResult<ModifierList> {
    let (list, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/{location_id}/modifier-lists/{modifier_list_id}"),
        Some(req),
    )?;
    Ok(list)
}

pub fn delete_modifier_list(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    modifier_list_id: &str,
) -> APIResult<()> {
    execute_delete(
        ctx,
        client,
        &format!("/v1/{location_id}/modifier-lists/{modifier_list_id}"),
    )
}

/// Associates a modifier list with an item, so options from the list can be
/// applied to the item.
pub fn apply_modifier_list(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    item_id: &str,
    modifier_list_id: &str,
) -> APIResult<Item> {
    let (item, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/{location_id}/items/{item_id}/modifier-lists/{modifier_list_id}"),
        None::<&()>,
    )?;
    Ok(item)
}

/// Removes a modifier list association from an item.
pub fn remove_modifier_list(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    item_id: &str,
    modifier_list_id: &str,
) -> APIResult<()> {
    execute_delete(
        ctx,
        client,
        &format!("/v1/{location_id}/items/{item_id}/modifier-lists/{modifier_list_id}"),
    )
}

/// Creates a modifier option and adds it to a modifier list.
pub fn create_modifier_option(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    modifier_list_id: &str,
    req: &CreateModifierOptionRequest,
) -> APIResult<ModifierOption> {
    let (option, _) = execute_request(
        ctx,
        client,
        Method::POST,
        &format!("/v1/{location_id}/modifier-lists/{modifier_list_id}/modifier-options"),
        Some(req),
    )?;
    Ok(option)
}

/// Modifies the details of an existing modifier option.
pub fn update_modifier_option(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    modifier_list_id: &str,
    modifier_option_id: &str,
    req: &UpdateModifierOptionRequest,
) -> APIResult<ModifierOption> {
    let (option, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!(
            "/v1/{location_id}/modifier-lists/{modifier_list_id}/modifier-options/{modifier_option_id}"
        ),
        Some(req),
    )?;
    Ok(option)
}

pub fn delete_modifier_option(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    modifier_list_id: &str,
    modifier_option_id: &str,
) -> APIResult<()> {
    execute_delete(
        ctx,
        client,
        &format!(
            "/v1/{location_id}/modifier-lists/{modifier_list_id}/modifier-options/{modifier_option_id}"
        ),
    )
}

/// Creates an item category. Items join or leave a category through
/// [`super::items::update_item`].
pub fn create_category(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    req: &CreateCategoryRequest,
) -> APIResult<Category> {
    let (category, _) = execute_request(
        ctx,
        client,
        Method::POST,
        &format!("/v1/{location_id}/categories"),
        Some(req),
    )?;
    Ok(category)
}

/// Lists all of a location's item categories.
pub fn list_categories(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
) -> APIResult<(Vec<Category>, Option<NextPage>)> {
    execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/categories"),
        None::<&()>,
    )
}

/// Modifies the details of an existing item category.
pub fn update_category(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    category_id: &str,
    req: &UpdateCategoryRequest,
) -> APIResult<Category> {
    let (category, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/{location_id}/categories/{category_id}"),
        Some(req),
    )?;
    Ok(category)
}

pub fn delete_category(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    category_id: &str,
) -> APIResult<()> {
    execute_delete(ctx, client, &format!("/v1/{location_id}/categories/{category_id}"))
}

/// Creates a discount.
pub fn create_discount(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    req: &CreateDiscountRequest,
) -> APIResult<Discount> {
    let (discount, _) = execute_request(
        ctx,
        client,
        Method::POST,
        &format!("/v1/{location_id}/discounts"),
        Some(req),
    )?;
    Ok(discount)
}

/// Lists all of a location's discounts.
pub fn list_discounts(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
) -> APIResult<(Vec<Discount>, Option<NextPage>)> {
    execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/discounts"),
        None::<&()>,
    )
}

/// Modifies the details of an existing discount.
pub fn update_discount(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    discount_id: &str,
    req: &UpdateDiscountRequest,
) -> APIResult<Discount> {
    let (discount, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/{location_id}/discounts/{discount_id}"),
        Some(req),
    )?;
    Ok(discount)
}

pub fn delete_discount(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    discount_id: &str,
) -> APIResult<()> {
    execute_delete(ctx, client, &format!("/v1/{location_id}/discounts/{discount_id}"))
}

/// Creates a fee (tax).
pub fn create_fee(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    req: &CreateFeeRequest,
) -> APIResult<Fee> {
    let (fee, _) = execute_request(
        ctx,
        client,
        Method::POST,
        &format!("/v1/{location_id}/fees"),
        Some(req),
    )?;
    Ok(fee)
}

/// Lists all of a location's fees (taxes).
pub fn list_fees(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
) -> APIResult<(Vec<Fee>, Option<NextPage>)> {
    execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/fees"),
        None::<&()>,
    )
}

/// Modifies the details of an existing fee (tax).
pub fn update_fee(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    fee_id: &str,
    req: &UpdateFeeRequest,
) -> APIResult<Fee> {
    let (fee, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/{location_id}/fees/{fee_id}"),
        Some(req),
    )?;
    Ok(fee)
}

pub fn delete_fee(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    fee_id: &str,
) -> APIResult<()> {
    execute_delete(ctx, client, &format!("/v1/{location_id}/fees/{fee_id}"))
}

/// Associates a fee with an item, so the fee is automatically applied to the
/// item in Square Register.
pub fn apply_fee(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    item_id: &str,
    fee_id: &str,
) -> APIResult<Item> {
    let (item, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/{location_id}/items/{item_id}/fees/{fee_id}"),
        None::<&()>,
    )?;
    Ok(item)
}

/// Removes a fee association from an item.
pub fn remove_fee(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    item_id: &str,
    fee_id: &str,
) -> APIResult<()> {
    execute_delete(
        ctx,
        client,
        &format!("/v1/{location_id}/items/{item_id}/fees/{fee_id}"),
    )
}

/// Batch descriptor equivalent of [`create_modifier_list`].
pub fn create_modifier_list_batch(
    access_token: &str,
    location_id: &str,
    req: &CreateModifierListRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::post(format!("/v1/{location_id}/modifier-lists"), access_token, req)
}

/// Batch descriptor equivalent of [`list_modifier_lists`].
#[must_use]
pub fn list_modifier_lists_batch(access_token: &str, location_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/{location_id}/modifier-lists"), access_token)
}

/// Batch descriptor equivalent of [`retrieve_modifier_list`].
#[must_use]
pub fn retrieve_modifier_list_batch(
    access_token: &str,
    location_id: &str,
    modifier_list_id: &str,
) -> BatchRequest {
    BatchRequest::get(
        format!("/v1/{location_id}/modifier-lists/{modifier_list_id}"),
        access_token,
    )
}

/// Batch descriptor equivalent of [`update_modifier_list`].
pub fn update_modifier_list_batch(
    access_token: &str,
    location_id: &str,
    modifier_list_id: &str,
    req: &UpdateModifierListRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(
        format!("/v1/{location_id}/modifier-lists/{modifier_list_id}"),
        access_token,
        req,
    )
}

/// Batch descriptor equivalent of [`delete_modifier_list`].
#[must_use]
pub fn delete_modifier_list_batch(
    access_token: &str,
    location_id: &str,
    modifier_list_id: &str,
) -> BatchRequest {
    BatchRequest::delete(
        format!("/v1/{location_id}/modifier-lists/{modifier_list_id}"),
        access_token,
    )
}

/// Batch descriptor equivalent of [`apply_modifier_list`].
#[must_use]
pub fn apply_modifier_list_batch(
    access_token: &str,
    location_id: &str,
    item_id: &str,
    modifier_list_id: &str,
) -> BatchRequest {
    BatchRequest::new(
        Method::PUT,
        format!("/v1/{location_id}/items/{item_id}/modifier-lists/{modifier_list_id}"),
        access_token,
    )
}

/// Batch descriptor equivalent of [`remove_modifier_list`].
#[must_use]
pub fn remove_modifier_list_batch(
    access_token: &str,
    location_id: &str,
    item_id: &str,
    modifier_list_id: &str,
) -> BatchRequest {
    BatchRequest::delete(
        format!("/v1/{location_id}/items/{item_id}/modifier-lists/{modifier_list_id}"),
        access_token,
    )
}

/// Batch descriptor equivalent of [`create_modifier_option`].
pub fn create_modifier_option_batch(
    access_token: &str,
    location_id: &str,
    modifier_list_id: &str,
    req: &CreateModifierOptionRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::post(
        format!("/v1/{location_id}/modifier-lists/{modifier_list_id}/modifier-options"),
        access_token,
        req,
    )
}

/// Batch descriptor equivalent of [`update_modifier_option`].
pub fn update_modifier_option_batch(
    access_token: &str,
    location_id: &str,
    modifier_list_id: &str,
    modifier_option_id: &str,
    req: &UpdateModifierOptionRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(
        format!(
            "/v1/{location_id}/modifier-lists/{modifier_list_id}/modifier-options/{modifier_option_id}"
        ),
        access_token,
        req,
    )
}

/// Batch descriptor equivalent of [`delete_modifier_option`].
#[must_use]
pub fn delete_modifier_option_batch(
    access_token: &str,
    location_id: &str,
    modifier_list_id: &str,
    modifier_option_id: &str,
) -> BatchRequest {
    BatchRequest::delete(
        format!(
            "/v1/{location_id}/modifier-lists/{modifier_list_id}/modifier-options/{modifier_option_id}"
        ),
        access_token,
    )
}

/// Batch descriptor equivalent of [`create_category`].
pub fn create_category_batch(
    access_token: &str,
    location_id: &str,
    req: &CreateCategoryRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::post(format!("/v1/{location_id}/categories"), access_token, req)
}

/// Batch descriptor equivalent of [`list_categories`].
#[must_use]
pub fn list_categories_batch(access_token: &str, location_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/{location_id}/categories"), access_token)
}

/// Batch descriptor equivalent of [`update_category`].
pub fn update_category_batch(
    access_token: &str,
    location_id: &str,
    category_id: &str,
    req: &UpdateCategoryRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(
        format!("/v1/{location_id}/categories/{category_id}"),
        access_token,
        req,
    )
}

/// Batch descriptor equivalent of [`delete_category`].
#[must_use]
pub fn delete_category_batch(
    access_token: &str,
    location_id: &str,
    category_id: &str,
) -> BatchRequest {
    BatchRequest::delete(format!("/v1/{location_id}/categories/{category_id}"), access_token)
}

/// Batch descriptor equivalent of [`create_discount`].
pub fn create_discount_batch(
    access_token: &str,
    location_id: &str,
    req: &CreateDiscountRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::post(format!("/v1/{location_id}/discounts"), access_token, req)
}

/// Batch descriptor equivalent of [`list_discounts`].
#[must_use]
pub fn list_discounts_batch(access_token: &str, location_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/{location_id}/discounts"), access_token)
}

/// Batch descriptor equivalent of [`update_discount`].
pub fn update_discount_batch(
    access_token: &str,
    location_id: &str,
    discount_id: &str,
    req: &UpdateDiscountRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(
        format!("/v1/{location_id}/discounts/{discount_id}"),
        access_token,
        req,
    )
}

/// Batch descriptor equivalent of [`delete_discount`].
#[must_use]
pub fn delete_discount_batch(
    access_token: &str,
    location_id: &str,
    discount_id: &str,
) -> BatchRequest {
    BatchRequest::delete(format!("/v1/{location_id}/discounts/{discount_id}"), access_token)
}

/// Batch descriptor equivalent of [`create_fee`].
pub fn create_fee_batch(
    access_token: &str,
    location_id: &str,
    req: &CreateFeeRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::post(format!("/v1/{location_id}/fees"), access_token, req)
}

/// Batch descriptor equivalent of [`list_fees`].
#[must_use]
pub fn list_fees_batch(access_token: &str, location_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/{location_id}/fees"), access_token)
}

/// Batch descriptor equivalent of [`update_fee`].
pub fn update_fee_batch(
    access_token: &str,
    location_id: &str,
    fee_id: &str,
    req: &UpdateFeeRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(format!("/v1/{location_id}/fees/{fee_id}"), access_token, req)
}

/// Batch descriptor equivalent of [`delete_fee`].
#[must_use]
pub fn delete_fee_batch(access_token: &str, location_id: &str, fee_id: &str) -> BatchRequest {
    BatchRequest::delete(format!("/v1/{location_id}/fees/{fee_id}"), access_token)
}

/// Batch descriptor equivalent of [`apply_fee`].
#[must_use]
pub fn apply_fee_batch(
    access_token: &str,
    location_id: &str,
    item_id: &str,
    fee_id: &str,
) -> BatchRequest {
    BatchRequest::new(
        Method::PUT,
        format!("/v1/{location_id}/items/{item_id}/fees/{fee_id}"),
        access_token,
    )
}

/// Batch descriptor equivalent of [`remove_fee`].
#[must_use]
pub fn remove_fee_batch(
    access_token: &str,
    location_id: &str,
    item_id: &str,
    fee_id: &str,
) -> BatchRequest {
    BatchRequest::delete(
        format!("/v1/{location_id}/items/{item_id}/fees/{fee_id}"),
        access_token,
    )
}
