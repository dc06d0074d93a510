//! Item repository
//!
//! Every operation is one statement. Writes use `RETURNING *` so the handler
//! gets the stored row without a second round trip.

use sqlx::PgPool;

use crate::models::{Item, ItemName, UpdateItemRequest};
use super::DbError;

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All items, newest first.
    pub async fn list(&self) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>("SELECT * FROM items ORDER BY id DESC")
            .fetch_all(self.pool)
            .await?;

        Ok(items)
    }

    /// Insert a row and return it with the generated `id` and `created_at`.
    pub async fn create(&self, name: &ItemName, description: Option<&str>) -> Result<Item, DbError> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(name.as_str())
        .bind(description)
        .fetch_one(self.pool)
        .await?;

        Ok(item)
    }

    /// Overwrite `name` and `description` of an existing row.
    ///
    /// A `None` name reaches the `NOT NULL` constraint and fails as a
    /// database error, not a validation error.
    pub async fn update(&self, id: i32, req: &UpdateItemRequest) -> Result<Item, DbError> {
        sqlx::query_as::<_, Item>(
            "UPDATE items SET name = $1, description = $2 WHERE id = $3 RETURNING *",
        )
        .bind(req.name.as_deref())
        .bind(req.description.as_deref())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound { resource: "item", id })
    }

    /// Remove a row and return what it held.
    pub async fn delete(&self, id: i32) -> Result<Item, DbError> {
        sqlx::query_as::<_, Item>("DELETE FROM items WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound { resource: "item", id })
    }
}
