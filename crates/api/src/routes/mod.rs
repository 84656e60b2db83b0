pub mod director;
pub mod genre;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree, mounted at the server root.
///
/// ```text
/// /movies               list (?director_id= / ?genre_id=), create
/// /movies/{id}          get, replace, delete
/// /directors            list, create
/// /directors/{id}       get (with movie list), replace, delete
/// /genres               list, create
/// /genres/{id}          get (with movie list), replace, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movie::router())
        .merge(director::router())
        .merge(genre::router())
}
