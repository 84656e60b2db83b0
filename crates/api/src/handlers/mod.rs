//! Request handlers for the catalog entities.
//!
//! Each submodule provides async handler functions (list, create, get_by_id,
//! replace, delete) for a single entity type. Handlers delegate to the
//! corresponding repository in `kinoteka_db` and map errors via [`AppError`].

use kinoteka_core::error::CoreError;
use kinoteka_core::types::DbId;

use crate::error::AppError;

pub mod director;
pub mod genre;
pub mod movie;

/// Reject a replace whose body carries an id different from the path id.
///
/// PUT bodies may echo the record id; the path is authoritative and the
/// primary key is never rewritten.
pub(crate) fn check_body_id(path_id: DbId, body_id: Option<DbId>) -> Result<(), AppError> {
    match body_id {
        Some(body_id) if body_id != path_id => {
            Err(AppError::Core(CoreError::Validation(format!(
                "id in body ({body_id}) does not match id in path ({path_id})"
            ))))
        }
        _ => Ok(()),
    }
}
