//! Route definitions for the `/genres` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::genre;
use crate::state::AppState;

/// Routes mounted at `/genres`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id (genre plus its movies)
/// PUT    /{id}    -> replace
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(genre::list).post(genre::create);
    Router::new()
        .route("/genres", collection.clone())
        .route("/genres/", collection)
        .route(
            "/genres/{id}",
            get(genre::get_by_id)
                .put(genre::replace)
                .delete(genre::delete),
        )
}
