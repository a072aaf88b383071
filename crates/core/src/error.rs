use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A stored geometry record that no longer parses or violates its
    /// invariants. Consumers must treat this as a skip-this-record
    /// condition, never as a fatal rendering failure.
    #[error("Corrupt geometry record: {0}")]
    CorruptGeometry(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
