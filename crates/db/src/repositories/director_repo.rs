//! Repository for the `director` table.

use kinoteka_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::director::{CreateDirector, Director, UpdateDirector};

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateDirector,
    ) -> Result<Director, sqlx::Error> {
        let query = format!(
            "INSERT INTO director (id, name) VALUES (?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(input.id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a director by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director WHERE id = ?");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every director, oldest first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director ORDER BY id");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Replace a director's fields, refreshing `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateDirector,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!(
            "UPDATE director SET name = ?, updated_at = CURRENT_TIMESTAMP
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.name)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a director by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM director WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
