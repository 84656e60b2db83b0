//! Repository for the `movie` table.

use kinoteka_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, trailer, year, rating, director_id, genre_id, \
     created_at, updated_at";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    ///
    /// A `NULL` id lets SQLite assign the next rowid; a caller-supplied id
    /// is used as-is and collisions surface as constraint errors.
    pub async fn create(pool: &SqlitePool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie
                (id, title, description, trailer, year, rating, director_id, genre_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(input.id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.director_id)
            .bind(input.genre_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every movie, oldest first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// List the movies whose director reference equals `director_id`.
    pub async fn list_by_director(
        pool: &SqlitePool,
        director_id: DbId,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE director_id = ? ORDER BY id");
        sqlx::query_as::<_, Movie>(&query)
            .bind(director_id)
            .fetch_all(pool)
            .await
    }

    /// List the movies whose genre reference equals `genre_id`.
    pub async fn list_by_genre(
        pool: &SqlitePool,
        genre_id: DbId,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE genre_id = ? ORDER BY id");
        sqlx::query_as::<_, Movie>(&query)
            .bind(genre_id)
            .fetch_all(pool)
            .await
    }

    /// Replace all mutable fields of a movie, refreshing `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists; no row is
    /// created in that case.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movie SET
                title = ?,
                description = ?,
                trailer = ?,
                year = ?,
                rating = ?,
                director_id = ?,
                genre_id = ?,
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.director_id)
            .bind(input.genre_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
