// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PetDeck` Store
//!
//! Persistent state for the `PetDeck` application.
//!
//! This crate provides:
//!
//! - **FavoritesStore**: Favorite images, deduplicated by URL
//! - **SettingsStore**: Dashboard preferences with persistence
//! - **KeyValueStore**: String slots on disk or in memory
//! - **Persistence**: Atomic, owner-only file I/O helpers
//!
//! ## Usage
//!
//! ```ignore
//! use petdeck_store::{FavoritesStore, SettingsStore};
//! use petdeck_core::{Animal, FavoriteCandidate};
//!
//! let favorites = FavoritesStore::open_default();
//! let records = favorites
//!     .add(FavoriteCandidate::new(url, Animal::Dog).with_breed("beagle"))
//!     .await?;
//!
//! let settings = SettingsStore::load_default().await?;
//! settings.set_value("image_count", "10").await?;
//! settings.save().await?;
//! ```

pub mod error;
pub mod favorites_store;
pub mod kv;
pub mod persistence;
pub mod settings_store;

pub use error::StoreError;
pub use favorites_store::{FAVORITES_KEY, FavoritesStore};
pub use kv::{FileKvStore, KeyValueStore, MemoryKvStore};
pub use persistence::{
    default_config_dir, default_data_dir, default_settings_path, load_json, load_json_or_default,
    save_json,
};
pub use settings_store::{
    DEFAULT_IMAGE_COUNT, DEFAULT_REFRESH_INTERVAL_SECS, MAX_IMAGE_COUNT, MAX_REFRESH_INTERVAL_SECS,
    MIN_IMAGE_COUNT, MIN_REFRESH_INTERVAL_SECS, Settings, SettingsStore, clamp_image_count,
    clamp_refresh_interval,
};
#[cfg(test)]
mod persistence_tests;
