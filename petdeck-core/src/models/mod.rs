//! Domain models for `PetDeck`.
//!
//! ## Submodules
//!
//! - [`animal`] - Animal kinds and gallery modes
//! - [`content`] - Images, facts and breeds as returned by providers
//! - [`favorite`] - Persisted favorite images

mod animal;
mod content;
mod favorite;

// Re-export everything at the models level
pub use animal::{Animal, GalleryType};
pub use content::{BreedName, FactCategory, FactEntry, ImageResult, display_breed};
pub use favorite::{FavoriteCandidate, FavoriteRecord, UNKNOWN_BREED};
