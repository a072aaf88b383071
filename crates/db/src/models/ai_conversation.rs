//! AI conversation log model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use paperdeck_core::types::{DbId, Timestamp};

/// A row from the `ai_conversations` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AiConversation {
    pub id: DbId,
    pub paper_id: Option<DbId>,
    pub annotation_id: Option<DbId>,
    pub user_question: String,
    pub ai_response: String,
    pub created_at: Timestamp,
}

/// Request body for the ask endpoint.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub paper_id: Option<DbId>,
    /// When set, the annotation's highlighted text is used as context
    /// and the exchange is attached to it as an AI comment.
    pub annotation_id: Option<DbId>,
}
