//! Handlers for the `/ai` resource.
//!
//! The responder behind these endpoints is the pluggable
//! [`paperdeck_core::ai::AiResponder`] in app state; the handlers only
//! own the recording flow (conversation row, AI-flagged comment).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use paperdeck_core::error::CoreError;
use paperdeck_core::types::DbId;
use paperdeck_db::models::ai_conversation::AskRequest;
use paperdeck_db::repositories::{AiConversationRepo, AnnotationRepo, CommentRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for the ask endpoint.
#[derive(Debug, Serialize)]
pub struct AskResult {
    pub response: String,
    pub conversation_id: DbId,
}

/// POST /api/v1/ai/ask
///
/// Answer a question, optionally grounded in an annotation's
/// highlighted text. When an annotation is referenced, the Q/A pair is
/// also attached to it as an `is_ai_response` comment.
pub async fn ask(
    State(state): State<AppState>,
    Json(input): Json<AskRequest>,
) -> AppResult<impl IntoResponse> {
    let question = input.question.trim();
    if question.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Question is required".to_string(),
        )));
    }

    // Resolve the highlighted context when an annotation is referenced.
    let context = match input.annotation_id {
        Some(annotation_id) => {
            let annotation = AnnotationRepo::find_by_id(&state.pool, annotation_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Annotation",
                    id: annotation_id,
                }))?;
            annotation.highlighted_text
        }
        None => String::new(),
    };

    let response = state.ai.respond(question, &context);

    let conversation = AiConversationRepo::create(
        &state.pool,
        input.paper_id,
        input.annotation_id,
        question,
        &response,
    )
    .await?;

    // Pair the exchange with the highlight as an AI-authored comment.
    if let Some(annotation_id) = input.annotation_id {
        let content = format!("Q: {question}\n\nA: {response}");
        CommentRepo::create(&state.pool, annotation_id, &content, true).await?;
    }

    tracing::info!(
        conversation_id = conversation.id,
        annotation_id = ?input.annotation_id,
        "AI exchange recorded",
    );

    Ok(Json(DataResponse {
        data: AskResult {
            response,
            conversation_id: conversation.id,
        },
    }))
}

/// GET /api/v1/ai/conversations/{paper_id}
///
/// List a paper's AI exchanges, newest first.
pub async fn list_conversations(
    State(state): State<AppState>,
    Path(paper_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let conversations = AiConversationRepo::list_by_paper(&state.pool, paper_id).await?;
    Ok(Json(DataResponse {
        data: conversations,
    }))
}
