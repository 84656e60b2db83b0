//! Movie entity model and DTOs.

use kinoteka_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movie` table.
///
/// Every column except `id` is nullable; the director and genre references
/// are optional foreign keys.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a movie. The store assigns `id` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}

/// DTO for replacing a movie (PUT semantics: every mutable column is
/// written as given, absent fields become NULL). A body `id`, if present,
/// must match the path id; the handler rejects mismatches.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovie {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}
