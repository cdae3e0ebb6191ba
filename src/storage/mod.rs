//! Key-value storage for the JSON collections
//!
//! The store holds whole collections as JSON strings under plain keys.
//! Implementations are injected into the repository; there is no global store.

mod file;
mod memory;
mod repository;

use async_trait::async_trait;

use crate::errors::Result;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::{InspectionFilter, InspectionRepository, CHECKLIST_ITEMS_KEY, INSPECTIONS_KEY};

/// Async string key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::errors::{FleetError, Result};

    use super::{KeyValueStore, MemoryStore};

    /// Memory store that can be told to fail every write to one key.
    ///
    /// Clones share the same entries and failure switch.
    #[derive(Debug, Clone, Default)]
    pub struct FailingStore {
        inner: Arc<MemoryStore>,
        failing_key: Arc<Mutex<Option<String>>>,
    }

    impl FailingStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every later `set` of `key` fail
        pub fn fail_writes_to(&self, key: &str) {
            *self.failing_key.lock().unwrap() = Some(key.to_string());
        }
    }

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            if self.failing_key.lock().unwrap().as_deref() == Some(key) {
                return Err(FleetError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("write to {} refused", key),
                )));
            }
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key).await
        }
    }
}
