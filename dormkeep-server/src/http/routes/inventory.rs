//! Inventory endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::repos::{InventoryItem, InventoryRepo, NewInventoryItem};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /inventory
async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    let items = InventoryRepo::new(&state.pool).list().await?;
    Ok(Json(items))
}

/// POST /inventory
async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewInventoryItem>,
) -> Result<(StatusCode, Json<InventoryItem>), ApiError> {
    let item = InventoryRepo::new(&state.pool).create(req).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /inventory/{item_id}
async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i64>,
) -> Result<Json<InventoryItem>, ApiError> {
    let item = InventoryRepo::new(&state.pool).get(item_id).await?;
    Ok(Json(item))
}

/// Inventory routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/inventory", get(list_items).post(create_item))
        .route("/inventory/", get(list_items).post(create_item))
        .route("/inventory/{item_id}", get(get_item))
}
