//! String-keyed slot storage used by the local backend.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tokio::task;

use crate::{
    db::Database,
    error::{PlanError, Result, ResultExt},
};

/// Durable storage of whole string values under string keys.
#[async_trait]
pub trait SlotStorage: Send + Sync {
    /// Reads the whole value under `key`.
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the whole value under `key`.
    async fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value under `key`.
    async fn clear(&self, key: &str) -> Result<()>;
}

#[async_trait]
impl<T: SlotStorage + ?Sized> SlotStorage for Arc<T> {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value).await
    }

    async fn clear(&self, key: &str) -> Result<()> {
        (**self).clear(key).await
    }
}

/// Slot storage in an SQLite database file.
///
/// Every call opens the database on the blocking pool, so the handle itself
/// is just the path and can be shared freely.
#[derive(Debug, Clone)]
pub struct SqliteSlots {
    db_path: PathBuf,
}

impl SqliteSlots {
    /// Opens (creating if needed) the database at `db_path`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FileSystem` if the parent directory cannot be
    /// created, `PlanError::Database` if schema initialization fails.
    pub async fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlanError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), PlanError>(())
        })
        .await
        .with_context("Task join error")??;

        Ok(Self { db_path })
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

#[async_trait]
impl SlotStorage for SqliteSlots {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let db_path = self.db_path.clone();
        let key = key.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.read_slot(&key)
        })
        .await
        .with_context("Task join error")?
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let key = key.to_string();
        let value = value.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.write_slot(&key, &value)
        })
        .await
        .with_context("Task join error")?
    }

    async fn clear(&self, key: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let key = key.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.clear_slot(&key)
        })
        .await
        .with_context("Task join error")?
    }
}

/// In-memory slot storage, for tests and embedding without a database file.
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlots {
    /// Creates empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage with one slot already filled.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::default();
        storage.lock().insert(key.into(), value.into());
        storage
    }

    /// Returns a copy of the value under `key` without going through the
    /// async interface.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still structurally valid; keep serving it.
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SlotStorage for MemorySlots {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.peek(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<()> {
        self.lock().remove(key);
        Ok(())
    }
}
