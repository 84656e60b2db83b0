//! Handlers for the `/directors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::types::DbId;
use kinoteka_db::models::director::{CreateDirector, Director, UpdateDirector};
use kinoteka_db::models::movie::Movie;
use kinoteka_db::repositories::{DirectorRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::check_body_id;
use crate::state::AppState;

/// GET /directors/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list_all(&state.pool).await?;
    Ok(Json(directors))
}

/// POST /directors/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDirector>,
) -> AppResult<(StatusCode, Json<Director>)> {
    let director = DirectorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(director)))
}

/// GET /directors/{id}
///
/// Returns a two-element array: the director record, then the movies whose
/// director reference equals `{id}`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<(Director, Vec<Movie>)>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    let movies = MovieRepo::list_by_director(&state.pool, id).await?;
    Ok(Json((director, movies)))
}

/// PUT /directors/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDirector>,
) -> AppResult<Json<Director>> {
    check_body_id(id, input.id)?;
    let director = DirectorRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    Ok(Json(director))
}

/// DELETE /directors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = DirectorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))
    }
}
