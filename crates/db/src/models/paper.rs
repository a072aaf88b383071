//! Paper model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use paperdeck_core::types::{DbId, Timestamp};

/// A row from the `papers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Paper {
    pub id: DbId,
    pub title: String,
    /// Original filename, kept as display metadata only.
    pub filename: String,
    /// Path of the stored file under the uploads directory.
    pub filepath: String,
    pub file_size: i64,
    pub upload_date: Timestamp,
}

/// List-view projection of a paper. Omits `filepath`, which is a
/// server-side detail.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PaperSummary {
    pub id: DbId,
    pub title: String,
    pub filename: String,
    pub file_size: i64,
    pub upload_date: Timestamp,
}

impl From<Paper> for PaperSummary {
    fn from(paper: Paper) -> Self {
        Self {
            id: paper.id,
            title: paper.title,
            filename: paper.filename,
            file_size: paper.file_size,
            upload_date: paper.upload_date,
        }
    }
}
