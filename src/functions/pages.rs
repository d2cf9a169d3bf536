//! Favorites pages in Square Register. A merchant has at most five pages,
//! each a 5x5 grid of cells.
use square_types::{CreatePageRequest, Page, PageCell, UpdateCellRequest, UpdatePageRequest};
use ureq::{http::Method, Agent};

use crate::{
    batch::BatchRequest,
    client::{append_query, execute_delete, execute_request},
    APIResult, NextPage, SquareContext,
};

/// Creates a Favorites page. A page doesn't appear in Square Register until
/// at least one of its cells has a value, set with [`update_cell`].
pub fn create_page(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    req: &CreatePageRequest,
) -> APIResult<Page> {
    let (page, _) = execute_request(
        ctx,
        client,
        Method::POST,
        &format!("/v1/{location_id}/pages"),
        Some(req),
    )?;
    Ok(page)
}

/// Lists all of a location's Favorites pages.
pub fn list_pages(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
) -> APIResult<(Vec<Page>, Option<NextPage>)> {
    execute_request(
        ctx,
        client,
        Method::GET,
        &format!("/v1/{location_id}/pages"),
        None::<&()>,
    )
}

/// Modifies the details of a Favorites page.
pub fn update_page(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    page_id: &str,
    req: &UpdatePageRequest,
) -> APIResult<Page> {
    let (page, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/{location_id}/pages/{page_id}"),
        Some(req),
    )?;
    Ok(page)
}

/// Deletes a Favorites page and all of its cells.
pub fn delete_page(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    page_id: &str,
) -> APIResult<()> {
    execute_delete(ctx, client, &format!("/v1/{location_id}/pages/{page_id}"))
}

/// Modifies a cell of a Favorites page.
pub fn update_cell(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    page_id: &str,
    req: &UpdateCellRequest,
) -> APIResult<PageCell> {
    let (cell, _) = execute_request(
        ctx,
        client,
        Method::PUT,
        &format!("/v1/{location_id}/pages/{page_id}/cells"),
        Some(req),
    )?;
    Ok(cell)
}

/// Deletes a cell from a Favorites page.
pub fn delete_cell(
    ctx: &SquareContext,
    client: &Agent,
    location_id: &str,
    page_id: &str,
    row: i64,
    column: i64,
) -> APIResult<()> {
    let path = append_query(
        format!("/v1/{location_id}/pages/{page_id}/cells"),
        &[("row", row.to_string()), ("column", column.to_string())],
    );
    execute_delete(ctx, client, &path)
}

/// Batch descriptor equivalent of [`create_page`].
pub fn create_page_batch(
    access_token: &str,
    location_id: &str,
    req: &CreatePageRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::post(format!("/v1/{location_id}/pages"), access_token, req)
}

/// Batch descriptor equivalent of [`list_pages`].
#[must_use]
pub fn list_pages_batch(access_token: &str, location_id: &str) -> BatchRequest {
    BatchRequest::get(format!("/v1/{location_id}/pages"), access_token)
}

/// Batch descriptor equivalent of [`update_page`].
pub fn update_page_batch(
    access_token: &str,
    location_id: &str,
    page_id: &str,
    req: &UpdatePageRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(format!("/v1/{location_id}/pages/{page_id}"), access_token, req)
}

/// Batch descriptor equivalent of [`delete_page`].
#[must_use]
pub fn delete_page_batch(access_token: &str, location_id: &str, page_id: &str) -> BatchRequest {
    BatchRequest::delete(format!("/v1/{location_id}/pages/{page_id}"), access_token)
}

/// Batch descriptor equivalent of [`update_cell`].
pub fn update_cell_batch(
    access_token: &str,
    location_id: &str,
    page_id: &str,
    req: &UpdateCellRequest,
) -> APIResult<BatchRequest> {
    BatchRequest::put(
        format!("/v1/{location_id}/pages/{page_id}/cells"),
        access_token,
        req,
    )
}

/// Batch descriptor equivalent of [`delete_cell`].
#[must_use]
pub fn delete_cell_batch(
    access_token: &str,
    location_id: &str,
    page_id: &str,
    row: i64,
    column: i64,
) -> BatchRequest {
    BatchRequest::delete(
        append_query(
            format!("/v1/{location_id}/pages/{page_id}/cells"),
            &[("row", row.to_string()), ("column", column.to_string())],
        ),
        access_token,
    )
}
