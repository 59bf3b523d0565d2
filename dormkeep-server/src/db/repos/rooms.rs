//! Room repository
//!
//! Rooms are created unoccupied. `occupied` only ever changes through
//! [`BookingRepo::book`](super::BookingRepo::book).

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Room record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
    pub occupied: bool,
    pub condition: String,
}

/// Payload for creating a room.
///
/// Any `id` or `occupied` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRoom {
    pub name: String,
    pub capacity: u32,
    pub condition: String,
}

/// Condition report for a single room
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct RoomCondition {
    pub room_id: i64,
    pub condition: String,
}

/// Room repository
pub struct RoomRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RoomRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a room and return it with its assigned id.
    pub async fn create(&self, room: NewRoom) -> Result<Room, DbError> {
        let room: Room = sqlx::query_as(
            r#"
            INSERT INTO rooms (name, capacity, occupied, condition)
            VALUES (?, ?, 0, ?)
            RETURNING id, name, capacity, occupied, condition
            "#,
        )
        .bind(&room.name)
        .bind(room.capacity)
        .bind(&room.condition)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(room_id = room.id, name = %room.name, "room created");
        Ok(room)
    }

    /// List all rooms in insertion order.
    pub async fn list(&self) -> Result<Vec<Room>, DbError> {
        let rooms = sqlx::query_as(
            r#"
            SELECT id, name, capacity, occupied, condition
            FROM rooms
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rooms)
    }

    /// Get a single room by id.
    pub async fn get(&self, id: i64) -> Result<Room, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, name, capacity, occupied, condition
            FROM rooms
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Room", id))
    }

    /// Report the recorded condition of a room.
    pub async fn condition(&self, id: i64) -> Result<RoomCondition, DbError> {
        sqlx::query_as("SELECT id AS room_id, condition FROM rooms WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Room", id))
    }
}
