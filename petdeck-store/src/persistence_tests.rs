//! Persistence round-trip and edge case tests.
//!
//! Tests file I/O operations, the file-backed key-value store, favorites on
//! disk and settings round-trip.

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use crate::favorites_store::{FAVORITES_KEY, FavoritesStore};
use crate::kv::{FileKvStore, KeyValueStore};
use crate::persistence::{ensure_dir, load_json, save_json};
use crate::settings_store::{Settings, SettingsStore};
use petdeck_core::{Animal, FavoriteCandidate, FavoriteRecord, GalleryType};

// ============================================================================
// JSON Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_save_and_load_json_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test.json");

    let settings = Settings {
        animal: Animal::Dog,
        image_count: 12,
        ..Settings::default()
    };

    save_json(&file_path, &settings).await.unwrap();
    let loaded: Settings = load_json(&file_path).await.unwrap();

    assert_eq!(loaded, settings);
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let nested_path = temp_dir.path().join("deeply").join("nested").join("path").join("test.json");

    let data = serde_json::json!({"key": "value"});

    let result = save_json(&nested_path, &data).await;
    assert!(result.is_ok());
    assert!(nested_path.exists());
}

#[tokio::test]
async fn test_save_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test.json");

    save_json(&file_path, &serde_json::json!([1, 2, 3])).await.unwrap();

    let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_load_nonexistent_file() {
    let file_path = PathBuf::from("/nonexistent/path/settings.json");

    let result: Result<Settings, _> = load_json(&file_path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_ensure_dir_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let dir_path = temp_dir.path().join("test_dir");

    ensure_dir(&dir_path).await.unwrap();
    ensure_dir(&dir_path).await.unwrap();

    assert!(dir_path.is_dir());
}

// ============================================================================
// File Key-Value Store Tests
// ============================================================================

#[tokio::test]
async fn test_file_kv_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileKvStore::new(temp_dir.path().join("data"));

    assert_eq!(store.get("slot").await.unwrap(), None);

    store.set("slot", "[1,2]").await.unwrap();
    assert_eq!(store.get("slot").await.unwrap().as_deref(), Some("[1,2]"));
    assert!(temp_dir.path().join("data").join("slot.json").exists());

    store.remove("slot").await.unwrap();
    assert_eq!(store.get("slot").await.unwrap(), None);
}

#[tokio::test]
async fn test_file_kv_remove_missing() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileKvStore::new(temp_dir.path());
    assert!(store.remove("never_written").await.is_ok());
}

#[cfg(unix)]
#[tokio::test]
async fn test_file_kv_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let store = FileKvStore::new(temp_dir.path());
    store.set("slot", "{}").await.unwrap();

    let metadata = tokio::fs::metadata(store.slot_path("slot").unwrap()).await.unwrap();
    assert_eq!(metadata.permissions().mode() & 0o777, 0o600);
}

// ============================================================================
// Favorites On Disk
// ============================================================================

#[tokio::test]
async fn test_favorites_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let kv = Arc::new(FileKvStore::new(temp_dir.path()));

    let added = {
        let store = FavoritesStore::new(kv.clone());
        store
            .add(FavoriteCandidate::new("https://images.dog.ceo/a.jpg", Animal::Dog).with_breed("hound"))
            .await
            .unwrap()
    };

    let reopened = FavoritesStore::new(kv);
    assert_eq!(reopened.list().await.unwrap(), added);
}

#[tokio::test]
async fn test_favorites_storage_format() {
    let temp_dir = TempDir::new().unwrap();
    let kv = Arc::new(FileKvStore::new(temp_dir.path()));
    let store = FavoritesStore::new(kv.clone());

    store
        .add(FavoriteCandidate::new("https://cdn2.thecatapi.com/x.jpg", Animal::Cat))
        .await
        .unwrap();

    let raw = kv.get(FAVORITES_KEY).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value[0];
    assert_eq!(entry["url"], "https://cdn2.thecatapi.com/x.jpg");
    assert_eq!(entry["animal"], "cat");
    assert_eq!(entry["breed"], "Unknown");
    assert!(entry["addedAt"].is_string());
    assert!(entry["id"].as_str().unwrap().parse::<i64>().is_ok());
}

#[tokio::test]
async fn test_favorites_read_existing_slot() {
    let temp_dir = TempDir::new().unwrap();
    let kv = Arc::new(FileKvStore::new(temp_dir.path()));
    kv.set(
        FAVORITES_KEY,
        r#"[{"id":"1700000000000","url":"https://a.jpg","animal":"dog","breed":"pug","addedAt":"2023-11-14T22:13:20.000Z"}]"#,
    )
    .await
    .unwrap();

    let records: Vec<FavoriteRecord> = FavoritesStore::new(kv).list().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].breed, "pug");
}

#[tokio::test]
async fn test_favorites_clear_deletes_slot() {
    let temp_dir = TempDir::new().unwrap();
    let kv = Arc::new(FileKvStore::new(temp_dir.path()));
    let store = FavoritesStore::new(kv.clone());

    store.add(FavoriteCandidate::new("https://a.jpg", Animal::Cat)).await.unwrap();
    store.clear().await.unwrap();

    assert!(!kv.slot_path(FAVORITES_KEY).unwrap().exists());
}

// ============================================================================
// Settings Store Tests
// ============================================================================

#[tokio::test]
async fn test_settings_store_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let store = SettingsStore::load(path.clone()).await.unwrap();
    store.set_value("gallery_type", "breed").await.unwrap();
    store.set_value("selected_breed", "Beagle").await.unwrap();
    store.save().await.unwrap();

    let reloaded = SettingsStore::load(path).await.unwrap().get().await;
    assert_eq!(reloaded.gallery_type, GalleryType::Breed);
    assert_eq!(reloaded.selected_breed.as_deref(), Some("Beagle"));
}

#[tokio::test]
async fn test_settings_out_of_range_file_is_clamped() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    tokio::fs::write(&path, r#"{"image_count": 500, "refresh_interval_secs": 2}"#)
        .await
        .unwrap();

    let settings = SettingsStore::load(path).await.unwrap().get().await;
    assert_eq!(settings.image_count, 20);
    assert_eq!(settings.refresh_interval_secs, 10);
    assert_eq!(settings.animal, Animal::Cat);
}

#[tokio::test]
async fn test_settings_corrupt_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    tokio::fs::write(&path, "not json").await.unwrap();

    let settings = SettingsStore::load(path).await.unwrap().get().await;
    assert_eq!(settings, Settings::default());
}

#[tokio::test]
async fn test_settings_reset() {
    let temp_dir = TempDir::new().unwrap();
    let store = SettingsStore::load(temp_dir.path().join("settings.json")).await.unwrap();
    store.set_value("image_count", "9").await.unwrap();
    store.reset().await;
    assert_eq!(store.get().await, Settings::default());
}
