//! Handlers for the `/annotations` resource.
//!
//! Incoming geometry is validated against the record schema at the
//! boundary and stored in canonical serialized form; the overlay
//! endpoint projects stored records server-side, skipping corrupt rows.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use paperdeck_core::error::CoreError;
use paperdeck_core::geometry::GeometryRecord;
use paperdeck_core::overlay::{self, OverlaySource};
use paperdeck_core::types::DbId;
use paperdeck_core::upload::{validate_highlighted_text, validate_page_number};
use paperdeck_db::models::annotation::CreateAnnotation;
use paperdeck_db::repositories::{AnnotationRepo, PaperRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a paper exists, returning NotFound if it does not.
async fn ensure_paper_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if !PaperRepo::exists(pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Paper", id }));
    }
    Ok(())
}

/// POST /api/v1/annotations
///
/// Create an annotation from a confirmed text selection. A missing
/// paper is a 404, distinct from the 400 for malformed fields.
pub async fn create_annotation(
    State(state): State<AppState>,
    Json(input): Json<CreateAnnotation>,
) -> AppResult<impl IntoResponse> {
    validate_page_number(input.page_number)?;
    let highlighted_text = validate_highlighted_text(&input.highlighted_text)?;
    let geometry = GeometryRecord::from_value(&input.coordinates)?;

    ensure_paper_exists(&state.pool, input.paper_id).await?;

    let annotation = AnnotationRepo::create(
        &state.pool,
        input.paper_id,
        input.page_number,
        &geometry.to_json(),
        &highlighted_text,
    )
    .await?;

    tracing::info!(
        annotation_id = annotation.id,
        paper_id = annotation.paper_id,
        page_number = annotation.page_number,
        "Annotation created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: annotation })))
}

/// GET /api/v1/annotations/paper/{paper_id}
///
/// List a paper's annotations newest first, each with its comment
/// thread oldest first.
pub async fn list_annotations(
    State(state): State<AppState>,
    Path(paper_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_paper_exists(&state.pool, paper_id).await?;

    let annotations = AnnotationRepo::list_by_paper_with_comments(&state.pool, paper_id).await?;

    Ok(Json(DataResponse { data: annotations }))
}

/// Query parameters for the overlay endpoint: the displayed page and
/// its current rendered size.
#[derive(Debug, Deserialize)]
pub struct OverlayParams {
    pub page: i32,
    pub page_width: f64,
    pub page_height: f64,
}

/// GET /api/v1/annotations/paper/{paper_id}/overlay
///
/// Project the paper's annotations for one page onto the given rendered
/// size. Rows with corrupt coordinates are skipped, never fatal; the
/// box order matches the annotation list order (newest first).
pub async fn page_overlay(
    State(state): State<AppState>,
    Path(paper_id): Path<DbId>,
    Query(params): Query<OverlayParams>,
) -> AppResult<impl IntoResponse> {
    validate_page_number(params.page)?;
    if params.page_width <= 0.0 || params.page_height <= 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "page_width and page_height must be positive".to_string(),
        )));
    }

    ensure_paper_exists(&state.pool, paper_id).await?;

    let annotations = AnnotationRepo::list_by_paper(&state.pool, paper_id).await?;
    let boxes = overlay::layout_page(
        annotations.iter().map(|a| OverlaySource {
            annotation_id: a.id,
            page_number: a.page_number,
            coordinates: &a.coordinates,
            highlighted_text: &a.highlighted_text,
        }),
        params.page,
        params.page_width,
        params.page_height,
    );

    Ok(Json(DataResponse { data: boxes }))
}

/// DELETE /api/v1/annotations/{id}
///
/// Delete an annotation; its comments cascade at the schema level.
pub async fn delete_annotation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !AnnotationRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Annotation",
            id,
        }));
    }

    tracing::info!(annotation_id = id, "Annotation deleted");

    Ok(StatusCode::NO_CONTENT)
}
