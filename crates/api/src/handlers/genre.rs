//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::types::DbId;
use kinoteka_db::models::genre::{CreateGenre, Genre, UpdateGenre};
use kinoteka_db::models::movie::Movie;
use kinoteka_db::repositories::{GenreRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::check_body_id;
use crate::state::AppState;

/// GET /genres/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list_all(&state.pool).await?;
    Ok(Json(genres))
}

/// POST /genres/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    let genre = GenreRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

/// GET /genres/{id}
///
/// Returns a two-element array: the genre record, then the movies whose
/// genre reference equals `{id}`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<(Genre, Vec<Movie>)>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    let movies = MovieRepo::list_by_genre(&state.pool, id).await?;
    Ok(Json((genre, movies)))
}

/// PUT /genres/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGenre>,
) -> AppResult<Json<Genre>> {
    check_body_id(id, input.id)?;
    let genre = GenreRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(Json(genre))
}

/// DELETE /genres/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = GenreRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Genre", id }))
    }
}
