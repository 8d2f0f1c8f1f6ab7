//! Shared test utilities for taskit-store unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use taskit_config::TrackerConfig;

    use crate::error::StoreError;
    use crate::notify::MemoryNotifier;
    use crate::service::TodoService;
    use crate::store::{MemoryStore, PersistentStore};

    /// In-memory service whose notifications are kept and dropped.
    pub fn test_service() -> TodoService {
        TodoService::open(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryNotifier::new()),
            &TrackerConfig::default(),
        )
    }

    /// Store whose writes fail until `set_failing(false)`.
    pub struct FailingStore {
        failing: AtomicBool,
        entries: Mutex<HashMap<String, String>>,
    }

    impl FailingStore {
        pub fn new() -> Self {
            Self {
                failing: AtomicBool::new(true),
                entries: Mutex::new(HashMap::new()),
            }
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        /// What actually landed under `key`.
        pub fn stored(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }
    }

    impl PersistentStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.stored(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(StoreError::Io {
                    key: key.to_string(),
                    source: std::io::Error::other("quota exceeded"),
                });
            }
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
