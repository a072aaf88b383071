//! Route definitions for the `/ai` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// ```text
/// POST /ask                        ask
/// GET  /conversations/{paper_id}   list_conversations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ask", post(ai::ask))
        .route("/conversations/{paper_id}", get(ai::list_conversations))
}
