//! File-backed key-value store
//!
//! Each key is a `<key>.json` file under one directory. Every write goes to
//! its own temporary file that is renamed over the target, so a reader sees
//! either the old or the new collection. Writers to the same key are
//! serialized per store; across processes the last rename wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{FleetError, Result};

use super::KeyValueStore;

type KeyLocks = Arc<Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>>;

/// Key-value store persisted as one file per key
///
/// Clones share the per-key write locks.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    write_locks: KeyLocks,
}

impl FileStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore {
            dir: dir.into(),
            write_locks: Arc::default(),
        }
    }

    /// Directory holding the key files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(FleetError::InvalidInput(format!("invalid store key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn write_lock(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.write_locks.lock().unwrap_or_else(|err| err.into_inner());
        locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    async fn write_temp(temp_path: &Path, value: &str) -> std::io::Result<()> {
        let mut file = tokio::fs::File::create(temp_path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                debug!(key, bytes = content.len(), "read store key");
                Ok(Some(content))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FleetError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let lock = self.write_lock(key);
        let _guard = lock.lock().await;

        // Keys never start with '.', so temp names cannot shadow a key file
        let temp_path = self.dir.join(format!(".{}.{}.tmp", key, Uuid::now_v7()));
        let written = match Self::write_temp(&temp_path, value).await {
            Ok(()) => tokio::fs::rename(&temp_path, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(FleetError::Io(e));
        }

        debug!(key, bytes = value.len(), "wrote store key");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FleetError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_key_reads_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        assert!(store.get("inspections").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_creates_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("nested").join("store"));

        store.set("inspections", "[]").await.unwrap();
        let names: Vec<_> = std::fs::read_dir(store.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["inspections.json".to_string()]);
        assert_eq!(store.get("inspections").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        store.set("checklist_items", "[1]").await.unwrap();
        store.set("checklist_items", "[2]").await.unwrap();
        assert_eq!(store.get("checklist_items").await.unwrap().as_deref(), Some("[2]"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_never_tear_the_file() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        // A second handle on the same directory shares no write locks
        let other = FileStore::new(temp.path());

        for round in 0..20 {
            let values: Vec<String> = (0..8)
                .map(|w| format!("[{}]", vec![format!("\"r{}w{}\"", round, w); 200].join(",")))
                .collect();

            let handles: Vec<_> = values
                .iter()
                .cloned()
                .enumerate()
                .map(|(w, value)| {
                    let store = if w % 2 == 0 { store.clone() } else { other.clone() };
                    tokio::spawn(async move { store.set("inspections", &value).await })
                })
                .collect();
            for handle in handles {
                handle.await.unwrap().unwrap();
            }

            let stored = store.get("inspections").await.unwrap().unwrap();
            assert!(values.contains(&stored), "round {} left a torn file", round);
        }

        let leftovers = std::fs::read_dir(temp.path())
            .unwrap()
            .filter(|e| e.as_ref().unwrap().file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn test_remove() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        store.set("inspections", "[]").await.unwrap();
        store.remove("inspections").await.unwrap();
        assert!(store.get("inspections").await.unwrap().is_none());
        // Second removal is a no-op
        store.remove("inspections").await.unwrap();
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        for key in ["", "../escape", "a/b", ".hidden"] {
            let err = store.set(key, "x").await.unwrap_err();
            assert!(matches!(err, FleetError::InvalidInput(_)), "key {:?}", key);
        }
    }
}
