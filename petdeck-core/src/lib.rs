// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PetDeck` Core
//!
//! Core types and models for the `PetDeck` application.
//!
//! This crate provides the foundational types shared by the fetch,
//! provider, store and CLI crates:
//!
//! - Domain models (animals, images, facts, breeds, favorites)
//! - URL validation helpers
//! - Error types
//!
//! ## Key Types
//!
//! ### Animal Types
//! - [`Animal`] - The supported animal kinds
//! - [`GalleryType`] - Random or breed-filtered image fetches
//!
//! ### Content Types
//! - [`ImageResult`] - A validated absolute image URL
//! - [`FactEntry`] - One fact about an animal
//! - [`FactCategory`] - Keyword classification of a fact
//! - [`BreedName`] - Provider-cased breed identifier
//!
//! ### Favorites
//! - [`FavoriteRecord`] - A persisted favorite image
//! - [`FavoriteCandidate`] - Input for creating a favorite

pub mod error;
pub mod models;
pub mod validation;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Animal types
    Animal,
    GalleryType,
    // Content types
    BreedName,
    FactCategory,
    FactEntry,
    ImageResult,
    display_breed,
    // Favorites
    FavoriteCandidate,
    FavoriteRecord,
    UNKNOWN_BREED,
};

pub use validation::{has_image_extension, is_valid_image_url};
