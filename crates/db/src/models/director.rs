//! Director entity model and DTOs.

use kinoteka_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `director` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a director. The store assigns `id` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDirector {
    pub id: Option<DbId>,
    pub name: Option<String>,
}

/// DTO for replacing a director.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDirector {
    pub id: Option<DbId>,
    pub name: Option<String>,
}
