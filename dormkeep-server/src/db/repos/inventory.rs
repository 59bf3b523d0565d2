//! Inventory repository

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Inventory item record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
    pub condition: String,
}

/// Payload for creating an inventory item
#[derive(Debug, Clone, Deserialize)]
pub struct NewInventoryItem {
    pub name: String,
    pub quantity: u32,
    pub condition: String,
}

/// Inventory repository
pub struct InventoryRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> InventoryRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, item: NewInventoryItem) -> Result<InventoryItem, DbError> {
        let item: InventoryItem = sqlx::query_as(
            r#"
            INSERT INTO inventory (name, quantity, condition)
            VALUES (?, ?, ?)
            RETURNING id, name, quantity, condition
            "#,
        )
        .bind(&item.name)
        .bind(item.quantity)
        .bind(&item.condition)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(item_id = item.id, name = %item.name, "inventory item created");
        Ok(item)
    }

    pub async fn list(&self) -> Result<Vec<InventoryItem>, DbError> {
        let items = sqlx::query_as("SELECT id, name, quantity, condition FROM inventory ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(items)
    }

    pub async fn get(&self, id: i64) -> Result<InventoryItem, DbError> {
        sqlx::query_as("SELECT id, name, quantity, condition FROM inventory WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Inventory item", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_pool;

    #[tokio::test]
    async fn create_list_get() {
        let pool = test_pool().await;
        let repo = InventoryRepo::new(&pool);

        let bed = repo
            .create(NewInventoryItem {
                name: "bed".into(),
                quantity: 40,
                condition: "good".into(),
            })
            .await
            .unwrap();
        let desk = repo
            .create(NewInventoryItem {
                name: "desk".into(),
                quantity: 0,
                condition: "broken".into(),
            })
            .await
            .unwrap();

        assert_eq!(repo.list().await.unwrap(), vec![bed.clone(), desk.clone()]);
        assert_eq!(repo.get(desk.id).await.unwrap().quantity, 0);
        assert_eq!(repo.get(bed.id).await.unwrap().name, "bed");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let err = InventoryRepo::new(&pool).get(3).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "Inventory item", .. }));
    }
}
