//! Route definitions for the `/directors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

/// Routes mounted at `/directors`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id (director plus their movies)
/// PUT    /{id}    -> replace
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(director::list).post(director::create);
    Router::new()
        .route("/directors", collection.clone())
        .route("/directors/", collection)
        .route(
            "/directors/{id}",
            get(director::get_by_id)
                .put(director::replace)
                .delete(director::delete),
        )
}
