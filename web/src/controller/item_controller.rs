use crate::params::item::{CreateParams, PatchParams, UpdateParams};
use crate::{AppState, Error};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use domain::{item as ItemApi, Id};

use log::*;

/// INDEX all Items
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "Successfully retrieved all Items", body = [domain::items::Model])
    )
)]
pub async fn index(State(app_state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let items = ItemApi::find_all(app_state.item_store_ref());

    Ok(Json(items))
}

/// GET an Item by its id
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = Id, Path, description = "The ID of the item to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the Item", body = domain::items::Model),
        (status = 404, description = "Item not found")
    )
)]
pub async fn read(
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    let item = ItemApi::find_by_id(app_state.item_store_ref(), id)?;

    Ok(Json(item))
}

/// CREATE a new Item
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateParams,
    responses(
        (status = 201, description = "Item created successfully", body = domain::items::Model),
        (status = 422, description = "Unprocessable entity, e.g. a non-positive price")
    )
)]
pub(crate) async fn create(
    State(app_state): State<AppState>,
    Json(params): Json<CreateParams>,
) -> Result<impl IntoResponse, Error> {
    let item = ItemApi::create(
        app_state.item_store_ref(),
        &app_state.event_publisher,
        params.into(),
    )
    .await?;
    info!("Item created: {item:?}");

    Ok((StatusCode::CREATED, Json(item)))
}

/// UPDATE an Item by fully replacing its fields
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = Id, Path, description = "The ID of the item to update")
    ),
    request_body = UpdateParams,
    responses(
        (status = 200, description = "Item updated successfully", body = domain::items::Model),
        (status = 404, description = "Item not found"),
        (status = 422, description = "Unprocessable entity, e.g. a non-positive price")
    )
)]
pub(crate) async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<UpdateParams>,
) -> Result<impl IntoResponse, Error> {
    let item = ItemApi::update(
        app_state.item_store_ref(),
        &app_state.event_publisher,
        id,
        params.into(),
    )
    .await?;

    Ok(Json(item))
}

/// PATCH an Item, applying only the supplied fields
#[utoipa::path(
    patch,
    path = "/items/{id}",
    params(
        ("id" = Id, Path, description = "The ID of the item to patch")
    ),
    request_body = PatchParams,
    responses(
        (status = 200, description = "Item patched successfully", body = domain::items::Model),
        (status = 404, description = "Item not found"),
        (status = 422, description = "Unprocessable entity, e.g. a non-positive price")
    )
)]
pub(crate) async fn patch(
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<PatchParams>,
) -> Result<impl IntoResponse, Error> {
    let item = ItemApi::patch(
        app_state.item_store_ref(),
        &app_state.event_publisher,
        id,
        params.into(),
    )
    .await?;

    Ok(Json(item))
}

/// DELETE an Item by its id
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = Id, Path, description = "The ID of the item to delete")
    ),
    responses(
        (status = 204, description = "Item deleted successfully"),
        (status = 404, description = "Item not found")
    )
)]
pub(crate) async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    info!("Deleting item: {id:?}");
    ItemApi::delete(app_state.item_store_ref(), &app_state.event_publisher, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
