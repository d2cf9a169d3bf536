//! Items, their variations, and inventory, all per-location.
use square_types::{
    AdjustInventoryRequest, CreateItemRequest, CreateVariationRequest, InventoryEntry, Item,
    ItemVariation, UpdateItemRequest, UpdateVariationRequest,
};
use ureq::{http::Method, Agent};

use super::push_pair;
use crate::{
    batch::BatchRequest,
    client::{append_query, execute_delete, execute_request},
    APIResult, NextPage, SquareContext,
};

/// Filters accepted by [`list_inventory`].
#[derive(Debug, Clone, Default)]
pub struct ListInventoryParams {
    pub limit: Option<usize>,
}

impl ListInventoryParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "limit", self.limit.as_ref());
        pairs
    }
}

/// Creates an item and at least one variation for it.
pub fn create_item(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    req: &CreateItemRequest,
) -> APIResult<Item> {
    let (item, _) = execute_request(
        ctx,
        client,
        Method::POST,
        &format!("/v1/{location_id}/items"),
        Some(req),
    )?;
    Ok(item)
}

/// Provides summary information for all of a location's items.
pub fn list_items(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
) -> APIResult<(Vec<Item>, Option<NextPage>)> {
    execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/items"),
        None::<&()>,
    )
}

/// Provides the details for a single item, including associated modifier
/// lists and fees.
pub fn retrieve_item(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    item_id: &str,
) -> APIResult<Item> {
    let (item, _) = execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/items/{item_id}"),
        None::<&()>,
    )?;
    Ok(item)
}

/// Modifies the core details of an existing item. Variations, modifier
/// lists, and fees have their own endpoints.
pub fn update_item(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    item_id: &str,
    req: &UpdateItemRequest,
) -> APIResult<Item> {
    let (item, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/{location_id}/items/{item_id}"),
        Some(req),
    )?;
    Ok(item)
}

/// Deletes an item and all of its variations.
pub fn delete_item(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    item_id: &str,
) -> APIResult<()> {
    execute_delete(ctx, client, &format!("/v1/{location_id}/items/{item_id}"))
}

/// Creates an item variation for an existing item.
pub fn create_variation(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    item_id: &str,
    req: &CreateVariationRequest,
) -> APIResult<ItemVariation> {
    let (variation, _) = execute_request(
        ctx,
        client,
        Method::POST,
        &format!("/v1/{location_id}/items/{item_id}/variations"),
        Some(req),
    )?;
    Ok(variation)
}

/// Modifies the details of an existing item variation.
pub fn update_variation(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    item_id: &str,
    variation_id: &str,
    req: &UpdateVariationRequest,
) -> APIResult<ItemVariation> {
    let (variation, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/{location_id}/items/{item_id}/variations/{variation_id}"),
        Some(req),
    )?;
    Ok(variation)
}

pub fn delete_variation(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    item_id: &str,
    variation_id: &str,
) -> APIResult<()> {
    execute_delete(
        ctx,
        client,
        &format!("/v1/{location_id}/items/{item_id}/variations/{variation_id}"),
    )
}

/// Provides inventory information for all inventory-enabled item variations
/// of a location.
pub fn list_inventory(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    params: &ListInventoryParams,
) -> APIResult<(Vec<InventoryEntry>, Option<NextPage>)> {
    let path = append_query(format!("/v1/{location_id}/inventory"), &params.to_query());
    execute_request(ctx, client, Method::GET, &path, None::<&()>)
}

/// Adjusts an item variation's current available inventory.
pub fn adjust_inventory(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    variation_id: &str,
    req: &AdjustInventoryRequest,
) -> APIResult<InventoryEntry> {
    let (entry, _) = execute_request(
        ctx,
        client,
        Method::POST,
        &format!("/v1/{location_id}/inventory/{variation_id}"),
        Some(req),
    )?;
    Ok(entry)
}

/// Batch descriptor equivalent of [`create_item`].
pub fn create_item_batch(
    access_token: &str,
    location_id: &str,
    req: &CreateItemRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::post(format!("/v1/{location_id}/items"), access_token, req)
}

/// Batch descriptor equivalent of [`list_items`].
#[must_use]
pub fn list_items_batch(access_token: &str, location_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/{location_id}/items"), access_token)
}

/// Batch descriptor equivalent of [`retrieve_item`].
#[must_use]
pub fn retrieve_item_batch(access_token: &str, location_id: &str, item_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/{location_id}/items/{item_id}"), access_token)
}

/// Batch descriptor equivalent of [`update_item`].
pub fn update_item_batch(
    access_token: &str,
    location_id: &str,
    item_id: &str,
    req: &UpdateItemRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(format!("/v1/{location_id}/items/{item_id}"), access_token, req)
}

/// Batch descriptor equivalent of [`delete_item`].
#[must_use]
pub fn delete_item_batch(access_token: &str, location_id: &str, item_id: &str) -> BatchRequest {
    BatchRequest::delete(format!("/v1/{location_id}/items/{item_id}"), access_token)
}

/// Batch descriptor equivalent of [`create_variation`].
pub fn create_variation_batch(
    access_token: &str,
    location_id: &str,
    item_id: &str,
    req: &CreateVariationRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::post(
        format!("/v1/{location_id}/items/{item_id}/variations"),
        access_token,
        req,
    )
}

/// Batch descriptor equivalent of [`update_variation`].
pub fn update_variation_batch(
    access_token: &str,
    location_id: &str,
    item_id: &str,
    variation_id: &str,
    req: &UpdateVariationRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(
        format!("/v1/{location_id}/items/{item_id}/variations/{variation_id}"),
        access_token,
        req,
    )
}

/// Batch descriptor equivalent of [`delete_variation`].
#[must_use]
pub fn delete_variation_batch(
    access_token: &str,
    location_id: &str,
    item_id: &str,
    variation_id: &str,
) -> BatchRequest {
    BatchRequest::delete(
        format!("/v1/{location_id}/items/{item_id}/variations/{variation_id}"),
        access_token,
    )
}

/// Batch descriptor equivalent of [`list_inventory`].
#[must_use]
pub fn list_inventory_batch(
    access_token: &str,
    location_id: &str,
    params: &ListInventoryParams,
) -> BatchRequest {
    BatchRequest::get(
        append_query(format!("/v1/{location_id}/inventory"), &params.to_query()),
        access_token,
    )
}

/// Batch descriptor equivalent of [`adjust_inventory`].
pub fn adjust_inventory_batch(
    access_token: &str,
    location_id: &str,
    variation_id: &str,
    req: &AdjustInventoryRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::post(
        format!("/v1/{location_id}/inventory/{variation_id}"),
        access_token,
        req,
    )
}

#[cfg(test)]
mod tests {
    use square_types::AdjustInventoryRequest;

    use super::adjust_inventory_batch;

    #[test]
    fn adjust_inventory_batch_embeds_the_serialized_body() {
        let req = AdjustInventoryRequest {
            quantity_delta: -2,
            adjustment_type: "SALE".to_string(),
            memo: None,
        };
        let descriptor = adjust_inventory_batch("tok", "loc0", "var1", &req).unwrap();
        assert_eq!(descriptor.method, "POST");
        assert_eq!(descriptor.relative_path, "/v1/loc0/inventory/var1");
        assert_eq!(
            descriptor.body,
            Some(serde_json::json!({"quantity_delta": -2, "adjustment_type": "SALE"}))
        );
    }
}
