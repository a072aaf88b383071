//! Repository for the `ai_conversations` table.

use sqlx::PgPool;

use paperdeck_core::types::DbId;

use crate::models::ai_conversation::AiConversation;

/// Column list for ai_conversations queries.
const COLUMNS: &str = "id, paper_id, annotation_id, user_question, ai_response, created_at";

/// Records and lists question/answer exchanges.
pub struct AiConversationRepo;

impl AiConversationRepo {
    /// Record an exchange, returning the created row.
    pub async fn create(
        pool: &PgPool,
        paper_id: Option<DbId>,
        annotation_id: Option<DbId>,
        user_question: &str,
        ai_response: &str,
    ) -> Result<AiConversation, sqlx::Error> {
        let query = format!(
            "INSERT INTO ai_conversations (paper_id, annotation_id, user_question, ai_response)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AiConversation>(&query)
            .bind(paper_id)
            .bind(annotation_id)
            .bind(user_question)
            .bind(ai_response)
            .fetch_one(pool)
            .await
    }

    /// List all exchanges for a paper, newest first.
    pub async fn list_by_paper(
        pool: &PgPool,
        paper_id: DbId,
    ) -> Result<Vec<AiConversation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ai_conversations
             WHERE paper_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, AiConversation>(&query)
            .bind(paper_id)
            .fetch_all(pool)
            .await
    }
}
