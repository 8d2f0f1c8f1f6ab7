//! Cross-cutting error types for Taskit.
//!
//! Store and configuration errors live in their own crates. A unified error
//! is deferred to `taskit-cli`, which wraps each of them in `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Taskit crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation before reaching a repository.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a task lookup miss.
    #[must_use]
    pub fn task_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "task".into(),
            id: id.to_string(),
        }
    }

    /// Shorthand for a category lookup miss.
    #[must_use]
    pub fn category_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "category".into(),
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::CoreError;

    #[test]
    fn not_found_names_entity_and_id() {
        assert_eq!(
            CoreError::task_not_found("t1").to_string(),
            "Entity not found: task t1"
        );
        assert_eq!(
            CoreError::category_not_found("c9").to_string(),
            "Entity not found: category c9"
        );
    }
}
