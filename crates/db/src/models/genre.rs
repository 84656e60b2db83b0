//! Genre entity model and DTOs.

use kinoteka_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `genre` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a genre. The store assigns `id` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub id: Option<DbId>,
    pub name: Option<String>,
}

/// DTO for replacing a genre.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGenre {
    pub id: Option<DbId>,
    pub name: Option<String>,
}
