use crate::types::DbId;

/// Domain-level failures shared by every layer.
///
/// Ownership failures are reported as [`CoreError::NotFound`] so callers
/// cannot distinguish "someone else's profile" from "no such profile".
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing (or not owned) profile.
    pub fn profile_not_found(id: DbId) -> Self {
        CoreError::NotFound {
            entity: "Profile",
            id,
        }
    }
}
