//! Favorites store.
//!
//! Owns the `favoriteImages` slot. Every operation reads the whole
//! collection from storage, and every mutation writes the whole collection
//! back before returning. Mutations are serialized through an async mutex
//! so two concurrent adds cannot lose each other's write.

use chrono::Utc;
use petdeck_core::{Animal, FavoriteCandidate, FavoriteRecord};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::error::StoreError;
use crate::kv::{FileKvStore, KeyValueStore, MemoryKvStore};

/// Storage slot holding the JSON array of favorites.
pub const FAVORITES_KEY: &str = "favoriteImages";

/// Persistent collection of favorite images, deduplicated by URL.
pub struct FavoritesStore {
    kv: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl FavoritesStore {
    /// Creates a store over the given key-value backend.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a store in the platform data directory.
    pub fn open_default() -> Self {
        Self::new(Arc::new(FileKvStore::open_default()))
    }

    /// Creates a store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKvStore::new()))
    }

    /// Reads the collection. Absent or unparseable data reads as empty.
    async fn load(&self) -> Result<Vec<FavoriteRecord>, StoreError> {
        let Some(raw) = self.kv.get(FAVORITES_KEY).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(error = %e, "Stored favorites are corrupt, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn persist(&self, records: &[FavoriteRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        self.kv.set(FAVORITES_KEY, &json).await
    }

    /// Adds a favorite and returns the updated collection.
    ///
    /// If a record with the same URL exists, nothing is written and the
    /// existing collection is returned.
    #[instrument(skip(self, candidate), fields(url = %candidate.url, animal = %candidate.animal))]
    pub async fn add(&self, candidate: FavoriteCandidate) -> Result<Vec<FavoriteRecord>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;

        if records.iter().any(|r| r.url == candidate.url) {
            debug!("Already a favorite");
            return Ok(records);
        }

        let record = FavoriteRecord::from_candidate(candidate, Utc::now());
        info!(id = %record.id, "Favorite added");
        records.push(record);
        self.persist(&records).await?;
        Ok(records)
    }

    /// Removes the favorite with `id` and returns the updated collection.
    ///
    /// Removing an unknown id still rewrites the collection unchanged.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> Result<Vec<FavoriteRecord>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;

        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            debug!("No favorite with that id");
        } else {
            info!("Favorite removed");
        }

        self.persist(&records).await?;
        Ok(records)
    }

    /// Removes every favorite by deleting the slot.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<Vec<FavoriteRecord>, StoreError> {
        let _guard = self.write_lock.lock().await;
        self.kv.remove(FAVORITES_KEY).await?;
        info!("Favorites cleared");
        Ok(Vec::new())
    }

    /// Returns every favorite in insertion order.
    pub async fn list(&self) -> Result<Vec<FavoriteRecord>, StoreError> {
        self.load().await
    }

    /// Returns the favorites for one animal.
    pub async fn list_by_animal(&self, animal: Animal) -> Result<Vec<FavoriteRecord>, StoreError> {
        let mut records = self.load().await?;
        records.retain(|r| r.animal == animal);
        Ok(records)
    }

    /// Returns the number of favorites.
    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.load().await?.len())
    }

    /// Returns true if `url` is already a favorite.
    pub async fn is_favorite(&self, url: &str) -> Result<bool, StoreError> {
        Ok(self.load().await?.iter().any(|r| r.url == url))
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore").finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(url: &str) -> FavoriteCandidate {
        FavoriteCandidate::new(url, Animal::Cat)
    }

    #[tokio::test]
    async fn test_add_dedups_by_url() {
        let store = FavoritesStore::in_memory();

        let first = store.add(cat("https://a.jpg")).await.unwrap();
        let second = store.add(cat("https://a.jpg").with_breed("Persian")).await.unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(first, second);
        assert_eq!(second[0].breed, "Unknown");
    }

    #[tokio::test]
    async fn test_add_appends_in_order() {
        let store = FavoritesStore::in_memory();
        store.add(cat("https://a.jpg")).await.unwrap();
        let records = store
            .add(FavoriteCandidate::new("https://b.jpg", Animal::Dog).with_breed("beagle"))
            .await
            .unwrap();

        let urls: Vec<_> = records.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.jpg", "https://b.jpg"]);
        assert_eq!(records[1].breed, "beagle");
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = FavoritesStore::in_memory();
        let records = store.add(cat("https://a.jpg")).await.unwrap();
        let id = records[0].id.clone();

        assert!(store.remove(&id).await.unwrap().is_empty());
        assert!(store.remove(&id).await.unwrap().is_empty());
        assert!(store.remove("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_then_list_empty() {
        let store = FavoritesStore::in_memory();
        store.add(cat("https://a.jpg")).await.unwrap();
        store.add(cat("https://b.jpg")).await.unwrap();

        assert!(store.clear().await.unwrap().is_empty());
        assert!(store.list().await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_queries() {
        let store = FavoritesStore::in_memory();
        store.add(cat("https://a.jpg")).await.unwrap();
        store.add(FavoriteCandidate::new("https://b.jpg", Animal::Dog)).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
        assert_eq!(store.list_by_animal(Animal::Dog).await.unwrap().len(), 1);
        assert!(store.is_favorite("https://a.jpg").await.unwrap());
        assert!(!store.is_favorite("https://c.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_slot_reads_empty() {
        let kv = Arc::new(MemoryKvStore::new());
        kv.set(FAVORITES_KEY, "{not json").await.unwrap();
        let store = FavoritesStore::new(kv.clone());

        assert!(store.list().await.unwrap().is_empty());

        // The next write replaces the corrupt value
        store.add(cat("https://a.jpg")).await.unwrap();
        let raw = kv.get(FAVORITES_KEY).await.unwrap().unwrap();
        assert!(raw.starts_with('['));
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let store = Arc::new(FavoritesStore::in_memory());
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.add(cat(&format!("https://{i}.jpg"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(store.count().await.unwrap(), 10);
    }
}
