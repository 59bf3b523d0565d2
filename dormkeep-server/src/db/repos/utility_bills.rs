//! Utility bill repository
//!
//! `student_id` is stored as given; it is not checked against `students`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Utility bill record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UtilityBill {
    pub id: i64,
    pub student_id: i64,
    pub amount: f64,
    pub due_date: NaiveDate,
}

/// Payload for creating a utility bill
#[derive(Debug, Clone, Deserialize)]
pub struct NewUtilityBill {
    pub student_id: i64,
    pub amount: f64,
    pub due_date: NaiveDate,
}

/// Utility bill repository
pub struct UtilityBillRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UtilityBillRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, bill: NewUtilityBill) -> Result<UtilityBill, DbError> {
        let bill: UtilityBill = sqlx::query_as(
            r#"
            INSERT INTO utility_bills (student_id, amount, due_date)
            VALUES (?, ?, ?)
            RETURNING id, student_id, amount, due_date
            "#,
        )
        .bind(bill.student_id)
        .bind(bill.amount)
        .bind(bill.due_date)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(bill_id = bill.id, student_id = bill.student_id, "utility bill created");
        Ok(bill)
    }

    pub async fn list(&self) -> Result<Vec<UtilityBill>, DbError> {
        let bills = sqlx::query_as(
            "SELECT id, student_id, amount, due_date FROM utility_bills ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(bills)
    }

    pub async fn get(&self, id: i64) -> Result<UtilityBill, DbError> {
        sqlx::query_as("SELECT id, student_id, amount, due_date FROM utility_bills WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Utility bill", id))
    }
}
