//! Input checks applied by the presentation layer before calling a repository.
//!
//! Repositories accept whatever they are given; these helpers are the only
//! place empty titles and names are rejected.

use crate::errors::CoreError;

/// Trim a task title and reject it when nothing is left.
///
/// # Errors
///
/// Returns `CoreError::Validation` for an empty or whitespace-only title.
pub fn validate_title(raw: &str) -> Result<String, CoreError> {
    non_empty(raw, "task title")
}

/// Trim a category name and reject it when nothing is left.
///
/// # Errors
///
/// Returns `CoreError::Validation` for an empty or whitespace-only name.
pub fn validate_category_name(raw: &str) -> Result<String, CoreError> {
    non_empty(raw, "category name")
}

fn non_empty(raw: &str, field: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
