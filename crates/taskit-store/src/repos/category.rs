//! Category repository: in-memory collection with write-through to the `categories` key.
//!
//! `delete` removes unconditionally. Refusing to delete a category that tasks
//! still reference is the caller's job; see
//! [`TodoService::delete_category`](crate::service::TodoService::delete_category).

use std::sync::Arc;

use taskit_core::entities::{Category, NewCategory};
use taskit_core::ids::new_id;

use crate::helpers::{load_collection, save_collection};
use crate::store::{CATEGORIES_KEY, PersistentStore};
use crate::updates::category::CategoryUpdate;

pub struct CategoryRepository {
    store: Arc<dyn PersistentStore>,
    categories: Vec<Category>,
}

impl CategoryRepository {
    #[must_use]
    pub fn load(store: Arc<dyn PersistentStore>) -> Self {
        let categories = load_collection(store.as_ref(), CATEGORIES_KEY);
        Self { store, categories }
    }

    #[must_use]
    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn add(&mut self, new: NewCategory) -> Category {
        let category = new.into_category(new_id());
        tracing::debug!(category_id = %category.id, name = %category.name, "adding category");
        self.categories.push(category.clone());
        self.persist();
        category
    }

    /// Returns `None` if no category has this id.
    pub fn update(&mut self, id: &str, update: &CategoryUpdate) -> Option<Category> {
        let category = self.categories.iter_mut().find(|c| c.id == id)?;
        if update.is_empty() {
            return Some(category.clone());
        }
        update.apply_to(category);
        let updated = category.clone();
        self.persist();
        Some(updated)
    }

    /// Remove the category without looking at tasks.
    pub fn delete(&mut self, id: &str) -> Option<Category> {
        let index = self.categories.iter().position(|c| c.id == id)?;
        let removed = self.categories.remove(index);
        tracing::debug!(category_id = %id, "deleted category");
        self.persist();
        Some(removed)
    }

    fn persist(&self) {
        if let Err(error) = save_collection(self.store.as_ref(), CATEGORIES_KEY, &self.categories)
        {
            tracing::error!(%error, count = self.categories.len(), "failed to persist categories");
        }
    }
}
