//! Booking - the one operation that touches two tables
//!
//! Checks, in order: student exists, room exists, room is free.
//! Claiming the room is a conditional update (`... AND occupied = 0`)
//! issued as the first statement of the transaction, so two concurrent
//! bookings of one room cannot both pass the occupancy check.

use serde::Serialize;
use sqlx::SqlitePool;

use super::DbError;

const NOT_FOUND_RESOURCE: &str = "Student or Room";
const OCCUPIED_MESSAGE: &str = "Room is already occupied";

/// Result of a successful booking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub message: String,
    pub student_id: i64,
    pub room_id: i64,
}

/// Booking repository
pub struct BookingRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookingRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Book `room_id` for `student_id` (atomic).
    ///
    /// Sets the room's `occupied` flag and the student's `room_id` and
    /// `has_booking` in one transaction. On any error the transaction is
    /// dropped uncommitted and nothing changes.
    pub async fn book(&self, student_id: i64, room_id: i64) -> Result<BookingConfirmation, DbError> {
        let mut tx = self.pool.begin().await?;

        // Must stay the first statement: the write lock is taken before any read.
        let claimed = sqlx::query("UPDATE rooms SET occupied = 1 WHERE id = ? AND occupied = 0")
            .bind(room_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            == 1;

        let (student_exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM students WHERE id = ?)")
                .bind(student_id)
                .fetch_one(&mut *tx)
                .await?;

        if !student_exists {
            return Err(missing(student_id, room_id));
        }

        if !claimed {
            let (room_exists,): (bool,) =
                sqlx::query_as("SELECT EXISTS(SELECT 1 FROM rooms WHERE id = ?)")
                    .bind(room_id)
                    .fetch_one(&mut *tx)
                    .await?;

            if !room_exists {
                return Err(missing(student_id, room_id));
            }

            tracing::warn!(student_id, room_id, "booking rejected: room already occupied");
            return Err(DbError::Conflict {
                message: OCCUPIED_MESSAGE.to_owned(),
            });
        }

        sqlx::query("UPDATE students SET room_id = ?, has_booking = 1 WHERE id = ?")
            .bind(room_id)
            .bind(student_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(student_id, room_id, "room booked");
        Ok(BookingConfirmation {
            message: format!("Room {} booked for student {}", room_id, student_id),
            student_id,
            room_id,
        })
    }
}

fn missing(student_id: i64, room_id: i64) -> DbError {
    DbError::NotFound {
        resource: NOT_FOUND_RESOURCE,
        id: format!("student {}, room {}", student_id, room_id),
    }
}
