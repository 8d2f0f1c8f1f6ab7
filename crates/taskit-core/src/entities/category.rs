use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named label used to group tasks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Caller-supplied fields for a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn into_category(self, id: String) -> Category {
        Category {
            id,
            name: self.name,
        }
    }
}
