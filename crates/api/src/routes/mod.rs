pub mod ai;
pub mod annotation;
pub mod comment;
pub mod health;
pub mod paper;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /papers/upload                               upload (multipart, POST)
/// /papers                                      list
/// /papers/{id}/pdf                             stream stored PDF
/// /papers/{id}                                 delete
///
/// /annotations                                 create
/// /annotations/paper/{paper_id}                list with comment threads
/// /annotations/paper/{paper_id}/overlay        projected highlight boxes
/// /annotations/{id}                            delete
///
/// /comments                                    create
/// /comments/annotation/{annotation_id}         list
/// /comments/{id}                               delete
///
/// /ai/ask                                      ask (POST)
/// /ai/conversations/{paper_id}                 conversation history
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/papers", paper::router())
        .nest("/annotations", annotation::router())
        .nest("/comments", comment::router())
        .nest("/ai", ai::router())
}
