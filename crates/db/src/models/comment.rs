//! Comment model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use paperdeck_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub annotation_id: DbId,
    pub content: String,
    pub is_ai_response: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new comment.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub annotation_id: DbId,
    pub content: String,
    /// Defaults to false (user-authored).
    pub is_ai_response: Option<bool>,
}
