//! In-memory key-value store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::Result;

use super::KeyValueStore;

/// Key-value store kept in process memory, one instance per owner
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("inspections").await.unwrap().is_none());

        store.set("inspections", "[]").await.unwrap();
        assert_eq!(store.get("inspections").await.unwrap().as_deref(), Some("[]"));

        store.remove("inspections").await.unwrap();
        assert!(store.get("inspections").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("nothing").await.is_ok());
    }

    #[tokio::test]
    async fn test_stores_are_isolated() {
        let a = MemoryStore::new();
        let b = MemoryStore::new();
        a.set("k", "v").await.unwrap();
        assert!(b.get("k").await.unwrap().is_none());
    }
}
