//! Repository for the `annotations` table.
//!
//! Annotations are append/delete only; there is deliberately no update
//! operation.

use sqlx::PgPool;

use paperdeck_core::types::DbId;

use crate::models::annotation::{Annotation, AnnotationWithComments};
use crate::models::comment::Comment;

/// Column list for annotations queries.
const COLUMNS: &str = "id, paper_id, page_number, coordinates, highlighted_text, created_at";

/// Provides create/list/delete operations for annotations.
pub struct AnnotationRepo;

impl AnnotationRepo {
    /// Create a new annotation, returning the created row.
    ///
    /// `coordinates` must already be the canonical serialized geometry
    /// record; validation happens at the API boundary.
    pub async fn create(
        pool: &PgPool,
        paper_id: DbId,
        page_number: i32,
        coordinates: &str,
        highlighted_text: &str,
    ) -> Result<Annotation, sqlx::Error> {
        let query = format!(
            "INSERT INTO annotations (paper_id, page_number, coordinates, highlighted_text)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(paper_id)
            .bind(page_number)
            .bind(coordinates)
            .bind(highlighted_text)
            .fetch_one(pool)
            .await
    }

    /// Find an annotation by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Annotation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM annotations WHERE id = $1");
        sqlx::query_as::<_, Annotation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all annotations for a paper, newest first.
    pub async fn list_by_paper(
        pool: &PgPool,
        paper_id: DbId,
    ) -> Result<Vec<Annotation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM annotations
             WHERE paper_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(paper_id)
            .fetch_all(pool)
            .await
    }

    /// List all annotations for a paper (newest first), each with its
    /// comment thread (oldest comment first).
    ///
    /// Comments are fetched in a single query and grouped in memory to
    /// avoid a per-annotation round trip.
    pub async fn list_by_paper_with_comments(
        pool: &PgPool,
        paper_id: DbId,
    ) -> Result<Vec<AnnotationWithComments>, sqlx::Error> {
        let annotations = Self::list_by_paper(pool, paper_id).await?;

        let mut comments: Vec<Comment> = sqlx::query_as(
            "SELECT c.id, c.annotation_id, c.content, c.is_ai_response, c.created_at
             FROM comments c
             JOIN annotations a ON a.id = c.annotation_id
             WHERE a.paper_id = $1
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(paper_id)
        .fetch_all(pool)
        .await?;

        Ok(annotations
            .into_iter()
            .map(|annotation| {
                let thread: Vec<Comment> = comments
                    .iter()
                    .filter(|c| c.annotation_id == annotation.id)
                    .cloned()
                    .collect();
                comments.retain(|c| c.annotation_id != annotation.id);
                AnnotationWithComments {
                    annotation,
                    comments: thread,
                }
            })
            .collect())
    }

    /// Delete an annotation by its ID. Comments cascade at the schema
    /// level. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM annotations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
