//! Annotation model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use paperdeck_core::types::{DbId, Timestamp};

use crate::models::comment::Comment;

/// A row from the `annotations` table.
///
/// Annotations are append/delete only: there is no update DTO and no
/// update statement anywhere in the repository.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Annotation {
    pub id: DbId,
    pub paper_id: DbId,
    pub page_number: i32,
    /// Serialized geometry record (`{x, y, width, height, pageX, pageY}`).
    pub coordinates: String,
    pub highlighted_text: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new annotation.
///
/// `coordinates` arrives as a JSON object so the geometry schema can be
/// validated at the boundary before it is serialized for storage.
#[derive(Debug, Deserialize)]
pub struct CreateAnnotation {
    pub paper_id: DbId,
    pub page_number: i32,
    pub coordinates: serde_json::Value,
    pub highlighted_text: String,
}

/// An annotation with its comment thread, oldest comment first.
#[derive(Debug, Serialize)]
pub struct AnnotationWithComments {
    #[serde(flatten)]
    pub annotation: Annotation,
    pub comments: Vec<Comment>,
}
