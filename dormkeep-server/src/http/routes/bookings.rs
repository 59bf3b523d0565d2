//! Booking endpoint

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};

use crate::db::repos::{BookingConfirmation, BookingRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// POST /students/{student_id}/book_room/{room_id} - book a room for a student
async fn book_room(
    State(state): State<Arc<AppState>>,
    Path((student_id, room_id)): Path<(i64, i64)>,
) -> Result<Json<BookingConfirmation>, ApiError> {
    let confirmation = BookingRepo::new(&state.pool).book(student_id, room_id).await?;
    Ok(Json(confirmation))
}

/// Booking routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/students/{student_id}/book_room/{room_id}", post(book_room))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::http::routes::test_support::{app, send};

    #[tokio::test]
    async fn booking_scenario() {
        let (app, _pool) = app().await;
        send(
            &app,
            Method::POST,
            "/rooms",
            Some(json!({"name": "101", "capacity": 2, "occupied": false, "condition": "good"})),
        )
        .await;
        send(&app, Method::POST, "/students", Some(json!({"name": "Alice"}))).await;
        send(&app, Method::POST, "/students", Some(json!({"name": "Bob"}))).await;

        let (status, body) = send(&app, Method::POST, "/students/1/book_room/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Room 1 booked for student 1");

        let (_, room) = send(&app, Method::GET, "/rooms/1", None).await;
        assert_eq!(room["occupied"], true);
        let (_, alice) = send(&app, Method::GET, "/students/1", None).await;
        assert_eq!(alice["has_booking"], true);
        assert_eq!(alice["room_id"], 1);

        let (status, body) = send(&app, Method::POST, "/students/2/book_room/1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Room is already occupied");

        let (_, bob) = send(&app, Method::GET, "/students/2", None).await;
        assert_eq!(bob["has_booking"], false);
        assert_eq!(bob["room_id"], json!(null));
        let (_, alice_after) = send(&app, Method::GET, "/students/1", None).await;
        assert_eq!(alice_after, alice);
    }

    #[tokio::test]
    async fn missing_student_or_room_is_404() {
        let (app, _pool) = app().await;
        send(&app, Method::POST, "/students", Some(json!({"name": "Alice"}))).await;

        let (status, body) = send(&app, Method::POST, "/students/1/book_room/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Student or Room not found");

        let (status, body) = send(&app, Method::POST, "/students/9/book_room/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Student or Room not found");
    }

    #[tokio::test]
    async fn non_numeric_ids_are_rejected() {
        let (app, _pool) = app().await;
        let (status, _) = send(&app, Method::POST, "/students/abc/book_room/1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
