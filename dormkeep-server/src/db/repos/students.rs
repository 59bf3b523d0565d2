//! Student repository
//!
//! Students start without a room. `room_id` and `has_booking` are set
//! together by booking and nowhere else.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Student record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub room_id: Option<i64>,
    pub has_booking: bool,
}

/// Payload for creating a student
#[derive(Debug, Clone, Deserialize)]
pub struct NewStudent {
    pub name: String,
}

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an unbooked student.
    pub async fn create(&self, student: NewStudent) -> Result<Student, DbError> {
        let student: Student = sqlx::query_as(
            r#"
            INSERT INTO students (name, room_id, has_booking)
            VALUES (?, NULL, 0)
            RETURNING id, name, room_id, has_booking
            "#,
        )
        .bind(&student.name)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(student_id = student.id, name = %student.name, "student created");
        Ok(student)
    }

    /// List all students in insertion order.
    pub async fn list(&self) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as(
            r#"
            SELECT id, name, room_id, has_booking
            FROM students
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(students)
    }

    /// Get a single student by id.
    pub async fn get(&self, id: i64) -> Result<Student, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, name, room_id, has_booking
            FROM students
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Student", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_pool;

    #[tokio::test]
    async fn create_starts_unbooked() {
        let pool = test_pool().await;
        let student = StudentRepo::new(&pool)
            .create(NewStudent {
                name: "Alice".into(),
            })
            .await
            .unwrap();

        assert_eq!(student.id, 1);
        assert_eq!(student.name, "Alice");
        assert_eq!(student.room_id, None);
        assert!(!student.has_booking);
    }

    #[tokio::test]
    async fn list_then_get_each() {
        let pool = test_pool().await;
        let repo = StudentRepo::new(&pool);
        for name in ["Alice", "Bohdan", "Chen"] {
            repo.create(NewStudent { name: name.into() }).await.unwrap();
        }

        let students = repo.list().await.unwrap();
        assert_eq!(students.len(), 3);
        for listed in &students {
            assert_eq!(&repo.get(listed.id).await.unwrap(), listed);
        }
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let err = StudentRepo::new(&pool).get(7).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "Student", .. }));
    }
}
