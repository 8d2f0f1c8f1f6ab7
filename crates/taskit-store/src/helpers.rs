//! Collection (de)serialization helpers.
//!
//! Both repositories keep their whole collection under one key as a JSON
//! array. Loading never fails: absent, unreadable, corrupt, or non-array
//! content all yield an empty collection. Saving reports errors so the
//! caller can log them.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::store::PersistentStore;

/// Load the collection stored under `key`, falling back to empty.
#[must_use]
pub fn load_collection<T: DeserializeOwned>(store: &dyn PersistentStore, key: &str) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::error!(key, %error, "failed to read collection; starting empty");
            return Vec::new();
        }
    };

    match decode_collection(&raw) {
        Ok(items) => {
            tracing::debug!(key, count = items.len(), "loaded collection");
            items
        }
        Err(reason) => {
            tracing::warn!(key, %reason, "discarding unreadable collection");
            Vec::new()
        }
    }
}

/// Decode a JSON array, rejecting any other shape.
///
/// # Errors
///
/// Returns a description of why `raw` is not an array of `T`.
pub fn decode_collection<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))?;
    if !value.is_array() {
        return Err("stored value is not an array".into());
    }
    serde_json::from_value(value).map_err(|e| format!("invalid record: {e}"))
}

/// Serialize `items` and write them under `key`.
///
/// # Errors
///
/// Returns `StoreError::Serialize` or the backend's write error.
pub fn save_collection<T: Serialize>(
    store: &dyn PersistentStore,
    key: &str,
    items: &[T],
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(items).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}
