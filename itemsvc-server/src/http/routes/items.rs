//! Item endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::db::repos::ItemRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ItemId, JsonBody};
use crate::http::server::AppState;
use crate::models::{CreateItemRequest, DeletedItem, Item, ItemName, UpdateItemRequest};

/// GET /items - every item, newest first
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = ItemRepo::new(&state.pool)
        .list()
        .await
        .map_err(ApiError::store("failed to fetch items"))?;

    Ok(Json(items))
}

/// POST /items - create an item
async fn create_item(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let name = ItemName::new(req.name.clone())?;
    let item = ItemRepo::new(&state.pool)
        .create(&name, req.description())
        .await
        .map_err(ApiError::store("failed to create item"))?;

    tracing::debug!(id = item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /items/{id} - overwrite name and description
async fn update_item(
    State(state): State<Arc<AppState>>,
    id: ItemId,
    JsonBody(req): JsonBody<UpdateItemRequest>,
) -> Result<Json<Item>, ApiError> {
    let id = id.parse_or("failed to update item")?;
    let item = ItemRepo::new(&state.pool)
        .update(id, &req)
        .await
        .map_err(ApiError::store("failed to update item"))?;

    Ok(Json(item))
}

/// DELETE /items/{id} - remove an item, echoing what it held
async fn delete_item(
    State(state): State<Arc<AppState>>,
    id: ItemId,
) -> Result<Json<DeletedItem>, ApiError> {
    let id = id.parse_or("failed to delete item")?;
    let item = ItemRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(ApiError::store("failed to delete item"))?;

    tracing::debug!(id = item.id, "item deleted");
    Ok(Json(DeletedItem::from(item)))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", put(update_item).delete(delete_item))
}
