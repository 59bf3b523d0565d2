//! Repository implementations for database access
//!
//! Each repository borrows the pool for the duration of one operation:
//! - create: INSERT ... RETURNING (one round trip)
//! - list: every row in id order
//! - get: NotFound when the id is absent

pub mod bookings;
pub mod inventory;
pub mod rooms;
pub mod students;
pub mod utility_bills;

pub use bookings::{BookingConfirmation, BookingRepo};
pub use inventory::{InventoryItem, InventoryRepo, NewInventoryItem};
pub use rooms::{NewRoom, Room, RoomCondition, RoomRepo};
pub use students::{NewStudent, Student, StudentRepo};
pub use utility_bills::{NewUtilityBill, UtilityBill, UtilityBillRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {message}")]
    Conflict { message: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Fresh in-memory store with the schema applied.
#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = crate::db::create_memory_pool()
        .await
        .expect("memory pool");
    crate::db::ensure_schema(&pool).await.expect("schema");
    pool
}
