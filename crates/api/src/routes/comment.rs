//! Route definitions for the `/comments` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// ```text
/// POST   /                                 create_comment
/// GET    /annotation/{annotation_id}       list_comments
/// DELETE /{id}                             delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(comment::create_comment))
        .route("/annotation/{annotation_id}", get(comment::list_comments))
        .route("/{id}", delete(comment::delete_comment))
}
