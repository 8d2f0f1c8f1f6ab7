//! Identifier generation.
//!
//! Ids are random v4 UUIDs in their hyphenated string form. Uniqueness comes
//! from generation alone; repositories never check for collisions.

use uuid::Uuid;

/// Generate a fresh entity id.
#[must_use]
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::new_id;

    #[test]
    fn ids_are_hyphenated_uuids() {
        let id = new_id();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
    }

    #[test]
    fn ids_do_not_repeat() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
    }
}
