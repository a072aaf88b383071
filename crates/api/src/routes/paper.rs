//! Route definitions for the `/papers` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use paperdeck_core::upload::MAX_UPLOAD_BYTES;

use crate::handlers::paper;
use crate::state::AppState;

/// Slack on top of the file size cap for the multipart framing and the
/// title field.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// ```text
/// POST   /upload      upload_paper (multipart: title, pdf)
/// GET    /            list_papers
/// GET    /{id}/pdf    download_pdf
/// DELETE /{id}        delete_paper
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(paper::upload_paper)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
        .route("/", get(paper::list_papers))
        .route("/{id}/pdf", get(paper::download_pdf))
        .route("/{id}", axum::routing::delete(paper::delete_paper))
}
