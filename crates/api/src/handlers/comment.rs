//! Handlers for the `/comments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use paperdeck_core::error::CoreError;
use paperdeck_core::types::DbId;
use paperdeck_db::models::comment::CreateComment;
use paperdeck_db::repositories::{AnnotationRepo, CommentRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/comments
///
/// Attach a comment to an annotation. The annotation must exist (404);
/// empty content is a validation error (400).
pub async fn create_comment(
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    let content = input.content.trim();
    if content.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "content must not be empty".to_string(),
        )));
    }

    if AnnotationRepo::find_by_id(&state.pool, input.annotation_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Annotation",
            id: input.annotation_id,
        }));
    }

    let comment = CommentRepo::create(
        &state.pool,
        input.annotation_id,
        content,
        input.is_ai_response.unwrap_or(false),
    )
    .await?;

    tracing::info!(
        comment_id = comment.id,
        annotation_id = comment.annotation_id,
        is_ai_response = comment.is_ai_response,
        "Comment created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// GET /api/v1/comments/annotation/{annotation_id}
///
/// List an annotation's comments, oldest first.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(annotation_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comments = CommentRepo::list_by_annotation(&state.pool, annotation_id).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CommentRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
