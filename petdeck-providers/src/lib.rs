// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PetDeck` Providers
//!
//! Animal-specific provider adapters and the API facade for `PetDeck`.
//!
//! Each animal module includes:
//!
//! - **Descriptor**: Static configuration (display name, hosts, default breeds)
//! - **Adapter**: [`AnimalAdapter`] implementation over the animal's providers
//! - **Parser**: Response parsing for each provider
//! - **Fallback**: Placeholders and fallback facts
//!
//! ## Supported Animals
//!
//! | Animal | Breeds | Facts | Images | Breed filter |
//! |--------|--------|-------|--------|--------------|
//! | Cat | catfact.ninja | catfact.ninja | thecatapi.com → cataas.com → random.cat → placekitten | ❌ |
//! | Dog | dog.ceo | dog-api.kinduff.com | dog.ceo → placedog | ✅ |
//!
//! ## Usage
//!
//! ```ignore
//! use petdeck_core::{Animal, GalleryType};
//! use petdeck_providers::AnimalApi;
//!
//! let api = AnimalApi::new();
//! let breeds = api.fetch_breeds(Animal::Dog).await;
//! let images = api.fetch_images(Animal::Dog, 5, Some("Beagle"), GalleryType::Breed).await?;
//! let facts = api.facts_or_fallback(Animal::Cat, 5).await;
//! ```

pub mod adapter;
pub mod api;
pub mod descriptor;
pub mod registry;

// Animal modules
pub mod cat;
pub mod dog;

// Re-export key types
pub use adapter::AnimalAdapter;
pub use api::{AnimalApi, FactsOutcome};
pub use descriptor::AnimalDescriptor;
pub use registry::AnimalRegistry;

// Re-export animal descriptors and adapters
pub use cat::{CatAdapter, CataasSource, RandomCatSource, TheCatApiSource, cat_descriptor};
pub use dog::{DogAdapter, dog_descriptor};

#[cfg(test)]
mod parser_edge_tests;
