//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /        -> list (optional ?director_id= / ?genre_id=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> replace
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(movie::list).post(movie::create);
    Router::new()
        .route("/movies", collection.clone())
        .route("/movies/", collection)
        .route(
            "/movies/{id}",
            get(movie::get_by_id)
                .put(movie::replace)
                .delete(movie::delete),
        )
}
