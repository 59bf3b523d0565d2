//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - The pool is passed in explicitly; no global store handle
//! - Every repository method is a single statement, except booking
//! - Booking runs in one transaction guarded by a conditional update

pub mod pool;
pub mod repos;
pub mod schema;

use sqlx::SqlitePool;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options, StoreConfig};
pub use repos::*;
pub use schema::ensure_schema;

/// Open the store described by `config` and create any missing tables.
pub async fn open_store(config: &StoreConfig) -> Result<SqlitePool, DbError> {
    let pool = create_pool_with_options(&config.database_url, config.max_connections).await?;
    ensure_schema(&pool).await?;

    tracing::info!(
        database_url = %config.database_url,
        max_connections = config.max_connections,
        "store ready"
    );
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dorm.db");
        let config = StoreConfig {
            database_url: format!("sqlite://{}", path.display()),
            max_connections: 2,
        };

        let pool = open_store(&config).await.expect("first open");
        let room = RoomRepo::new(&pool)
            .create(NewRoom {
                name: "101".into(),
                capacity: 2,
                condition: "good".into(),
            })
            .await
            .expect("create room");
        pool.close().await;

        assert!(path.exists(), "schema bootstrap should create the file");

        let pool = open_store(&config).await.expect("second open");
        let rooms = RoomRepo::new(&pool).list().await.expect("list rooms");
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, room.id);
        assert_eq!(rooms[0].name, "101");
    }
}
