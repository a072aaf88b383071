//! Route definitions for the `/annotations` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::annotation;
use crate::state::AppState;

/// ```text
/// POST   /                                 create_annotation
/// GET    /paper/{paper_id}                 list_annotations (with comments)
/// GET    /paper/{paper_id}/overlay         page_overlay (?page, ?page_width, ?page_height)
/// DELETE /{id}                             delete_annotation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(annotation::create_annotation))
        .route("/paper/{paper_id}", get(annotation::list_annotations))
        .route("/paper/{paper_id}/overlay", get(annotation::page_overlay))
        .route("/{id}", delete(annotation::delete_annotation))
}
