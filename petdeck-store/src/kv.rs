//! Key-value storage capability.
//!
//! A slot holds one string value. Values are opaque to the store, so a
//! slot can hold anything a caller wrote, including text that no longer
//! parses.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::error::StoreError;
use crate::persistence::{default_data_dir, read_optional, remove_if_exists, write_atomic};

// ============================================================================
// Trait
// ============================================================================

/// Asynchronous string key-value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads a slot, returning `None` if it has never been written.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes a slot, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes a slot. Removing a missing slot succeeds.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

// ============================================================================
// File Store
// ============================================================================

/// Stores each slot as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store in the platform data directory.
    pub fn open_default() -> Self {
        Self::new(default_data_dir())
    }

    /// Returns the root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `key`.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileKvStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        read_optional(&self.slot_path(key)?).await
    }

    #[instrument(skip(self, value), fields(len = value.len()))]
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        write_atomic(&self.slot_path(key)?, value).await?;
        debug!(key, "Slot written");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        remove_if_exists(&self.slot_path(key)?).await
    }
}

// ============================================================================
// Memory Store
// ============================================================================

/// In-process store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.slots.write().await.remove(key);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
