//! Room endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::repos::{NewRoom, Room, RoomCondition, RoomRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /rooms - list all rooms
async fn list_rooms(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Room>>, ApiError> {
    let rooms = RoomRepo::new(&state.pool).list().await?;
    Ok(Json(rooms))
}

/// POST /rooms - create a new room
async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewRoom>,
) -> Result<(StatusCode, Json<Room>), ApiError> {
    let room = RoomRepo::new(&state.pool).create(req).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /rooms/{room_id} - get a single room
async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<i64>,
) -> Result<Json<Room>, ApiError> {
    let room = RoomRepo::new(&state.pool).get(room_id).await?;
    Ok(Json(room))
}

/// GET /rooms/{room_id}/condition - condition report
async fn get_room_condition(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<i64>,
) -> Result<Json<RoomCondition>, ApiError> {
    let report = RoomRepo::new(&state.pool).condition(room_id).await?;
    Ok(Json(report))
}

/// Room routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rooms", get(list_rooms).post(create_room))
        .route("/rooms/", get(list_rooms).post(create_room))
        .route("/rooms/{room_id}", get(get_room))
        .route("/rooms/{room_id}/condition", get(get_room_condition))
}
