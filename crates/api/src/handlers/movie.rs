//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::types::DbId;
use kinoteka_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use kinoteka_db::repositories::MovieRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::check_body_id;
use crate::state::AppState;

/// Query parameters for `GET /movies/`.
///
/// When both are present only `director_id` applies.
#[derive(Debug, Deserialize)]
pub struct MovieListParams {
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}

/// GET /movies/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = match (params.director_id, params.genre_id) {
        (Some(director_id), _) => MovieRepo::list_by_director(&state.pool, director_id).await?,
        (None, Some(genre_id)) => MovieRepo::list_by_genre(&state.pool, genre_id).await?,
        (None, None) => MovieRepo::list_all(&state.pool).await?,
    };
    Ok(Json(movies))
}

/// POST /movies/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = MovieRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Full replace: every mutable column is written from the body, absent
/// fields become NULL.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    check_body_id(id, input.id)?;
    let movie = MovieRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }))
    }
}
