//! Dashboard preferences store.
//!
//! Manages user settings with persistence. Numeric
//! settings are clamped into range on load and on every update, so a
//! hand-edited file can never push the dashboard outside its limits.

use petdeck_core::{Animal, GalleryType};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::persistence::{default_settings_path, load_json, save_json};

// ============================================================================
// Limits
// ============================================================================

/// Smallest image batch.
pub const MIN_IMAGE_COUNT: u32 = 1;
/// Largest image batch.
pub const MAX_IMAGE_COUNT: u32 = 20;
/// Default image batch.
pub const DEFAULT_IMAGE_COUNT: u32 = 5;

/// Shortest auto-refresh interval, in seconds.
pub const MIN_REFRESH_INTERVAL_SECS: u64 = 10;
/// Longest auto-refresh interval, in seconds.
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 300;
/// Default auto-refresh interval, in seconds.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

/// Clamps a refresh interval into the supported range.
pub fn clamp_refresh_interval(secs: u64) -> u64 {
    secs.clamp(MIN_REFRESH_INTERVAL_SECS, MAX_REFRESH_INTERVAL_SECS)
}

/// Clamps an image count into the supported range.
pub fn clamp_image_count(count: u32) -> u32 {
    count.clamp(MIN_IMAGE_COUNT, MAX_IMAGE_COUNT)
}

// ============================================================================
// Settings Types
// ============================================================================

/// Dashboard preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Animal shown on startup.
    pub animal: Animal,

    /// Breed used for breed galleries.
    pub selected_breed: Option<String>,

    /// Images per batch.
    pub image_count: u32,

    /// Random or breed-filtered batches.
    pub gallery_type: GalleryType,

    /// Refresh images and facts on a timer.
    pub auto_refresh: bool,

    /// Seconds between refreshes.
    pub refresh_interval_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animal: Animal::Cat,
            selected_breed: None,
            image_count: DEFAULT_IMAGE_COUNT,
            gallery_type: GalleryType::Random,
            auto_refresh: false,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl Settings {
    /// Keys accepted by [`Settings::set_value`].
    pub const KEYS: &'static [&'static str] = &[
        "animal",
        "selected_breed",
        "image_count",
        "gallery_type",
        "auto_refresh",
        "refresh_interval",
    ];

    /// Returns a copy with every numeric value clamped into range and a
    /// blank breed cleared.
    pub fn clamped(mut self) -> Self {
        self.image_count = clamp_image_count(self.image_count);
        self.refresh_interval_secs = clamp_refresh_interval(self.refresh_interval_secs);
        if self.selected_breed.as_deref().is_some_and(|b| b.trim().is_empty()) {
            self.selected_breed = None;
        }
        self
    }

    /// Sets one setting from its textual form.
    ///
    /// Out-of-range numbers are clamped rather than rejected.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let invalid = || StoreError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "animal" => {
                let animal = value.parse().map_err(|_| invalid())?;
                if animal != self.animal {
                    self.selected_breed = None;
                }
                self.animal = animal;
            }
            "selected_breed" | "breed" => {
                let value = value.trim();
                self.selected_breed = (!value.is_empty()).then(|| value.to_string());
            }
            "image_count" | "count" => {
                self.image_count = clamp_image_count(value.trim().parse().map_err(|_| invalid())?);
            }
            "gallery_type" | "gallery" => self.gallery_type = value.parse().map_err(|_| invalid())?,
            "auto_refresh" => self.auto_refresh = parse_bool(value).ok_or_else(invalid)?,
            "refresh_interval" | "refresh_interval_secs" => {
                self.refresh_interval_secs = clamp_refresh_interval(value.trim().parse().map_err(|_| invalid())?);
            }
            other => return Err(StoreError::UnknownSetting(other.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

// ============================================================================
// Settings Store
// ============================================================================

/// Persistent settings store.
pub struct SettingsStore {
    settings: RwLock<Settings>,
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store with default settings backed by `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            settings: RwLock::new(Settings::default()),
            path,
        }
    }

    /// Loads settings from the default path.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be loaded from disk.
    pub async fn load_default() -> Result<Self, StoreError> {
        Self::load(default_settings_path()).await
    }

    /// Loads settings from a path.
    ///
    /// A missing or unreadable file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be loaded from disk.
    pub async fn load(path: PathBuf) -> Result<Self, StoreError> {
        let settings = if path.exists() {
            info!(path = %path.display(), "Loading settings");
            load_json::<Settings>(&path).await.map_or_else(
                |e| {
                    warn!(error = %e, "Failed to load settings, using defaults");
                    Settings::default()
                },
                Settings::clamped,
            )
        } else {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            Settings::default()
        };

        let store = Self::new(path);
        *store.settings.write().await = settings;
        Ok(store)
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Gets a copy of the current settings.
    pub async fn get(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Updates settings and clamps the result.
    pub async fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.settings.write().await;
        f(&mut settings);
        *settings = settings.clone().clamped();
    }

    /// Sets one setting from its textual form.
    ///
    /// # Errors
    ///
    /// Returns error for unknown keys or unparseable values.
    pub async fn set_value(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut updated = self.get().await;
        updated.set_value(key, value)?;
        self.update(|s| *s = updated).await;
        Ok(())
    }

    /// Restores defaults.
    pub async fn reset(&self) {
        self.update(|s| *s = Settings::default()).await;
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be written to disk.
    pub async fn save(&self) -> Result<(), StoreError> {
        let settings = self.settings.read().await;
        save_json(&self.path, &*settings).await?;
        info!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
