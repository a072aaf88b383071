//! Repository for the `comments` table.

use sqlx::PgPool;

use paperdeck_core::types::DbId;

use crate::models::comment::Comment;

/// Column list for comments queries.
const COLUMNS: &str = "id, annotation_id, content, is_ai_response, created_at";

/// Provides create/list/delete operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Create a new comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        annotation_id: DbId,
        content: &str,
        is_ai_response: bool,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (annotation_id, content, is_ai_response)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(annotation_id)
            .bind(content)
            .bind(is_ai_response)
            .fetch_one(pool)
            .await
    }

    /// List all comments on an annotation, oldest first.
    pub async fn list_by_annotation(
        pool: &PgPool,
        annotation_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE annotation_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(annotation_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a comment by its ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
