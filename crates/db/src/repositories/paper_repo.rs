//! Repository for the `papers` table.

use sqlx::PgPool;

use paperdeck_core::types::DbId;

use crate::models::paper::{Paper, PaperSummary};

/// Column list for papers queries.
const COLUMNS: &str = "id, title, filename, filepath, file_size, upload_date";

/// Provides CRUD operations for papers.
pub struct PaperRepo;

impl PaperRepo {
    /// Create a paper row for an already-stored upload, returning the
    /// created row.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        filename: &str,
        filepath: &str,
        file_size: i64,
    ) -> Result<Paper, sqlx::Error> {
        let query = format!(
            "INSERT INTO papers (title, filename, filepath, file_size)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Paper>(&query)
            .bind(title)
            .bind(filename)
            .bind(filepath)
            .bind(file_size)
            .fetch_one(pool)
            .await
    }

    /// List all papers, newest upload first, without filepaths.
    pub async fn list(pool: &PgPool) -> Result<Vec<PaperSummary>, sqlx::Error> {
        sqlx::query_as::<_, PaperSummary>(
            "SELECT id, title, filename, file_size, upload_date
             FROM papers
             ORDER BY upload_date DESC, id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Find a paper by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Paper>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM papers WHERE id = $1");
        sqlx::query_as::<_, Paper>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a paper with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM papers WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Delete a paper by its ID. Annotations and their comments cascade
    /// at the schema level. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM papers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
