//! Schema bootstrap
//!
//! No migration mechanism: tables are created if absent, never altered.

use sqlx::SqlitePool;

const SCHEMA: &str = include_str!("schema.sql");

/// Create all tables and indexes that do not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::debug!("Applying schema...");
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn creates_all_tables() {
        let pool = create_memory_pool().await.expect("pool");
        ensure_schema(&pool).await.expect("schema");

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .expect("query tables");

        assert_eq!(tables, vec!["inventory", "rooms", "students", "utility_bills"]);
    }

    #[tokio::test]
    async fn is_idempotent() {
        let pool = create_memory_pool().await.expect("pool");
        ensure_schema(&pool).await.expect("first run");
        ensure_schema(&pool).await.expect("second run");
    }
}
