//! Animal registry for managing all animal descriptors.
//!
//! The registry provides static access to every animal's configuration
//! and is the central point for building adapters.

use petdeck_core::Animal;
use std::sync::OnceLock;

use crate::cat::cat_descriptor;
use crate::descriptor::AnimalDescriptor;
use crate::dog::dog_descriptor;

// ============================================================================
// Static Registry
// ============================================================================

/// Static storage for all animal descriptors.
static DESCRIPTORS: OnceLock<Vec<AnimalDescriptor>> = OnceLock::new();

fn init_descriptors() -> Vec<AnimalDescriptor> {
    vec![cat_descriptor(), dog_descriptor()]
}

// ============================================================================
// Animal Registry
// ============================================================================

/// Global registry of all animal descriptors.
///
/// Initialized lazily on first access.
pub struct AnimalRegistry;

impl AnimalRegistry {
    /// Returns all descriptors.
    pub fn all() -> &'static [AnimalDescriptor] {
        DESCRIPTORS.get_or_init(init_descriptors)
    }

    /// Gets a descriptor by animal.
    pub fn get(animal: Animal) -> Option<&'static AnimalDescriptor> {
        Self::all().iter().find(|d| d.animal == animal)
    }

    /// Returns every provider host across all animals, without duplicates.
    pub fn provider_domains() -> Vec<&'static str> {
        let mut domains: Vec<&'static str> = Self::all()
            .iter()
            .flat_map(|d| d.provider_domains.iter().copied())
            .collect();
        domains.sort_unstable();
        domains.dedup();
        domains
    }

    /// Returns the number of registered animals.
    pub fn count() -> usize {
        Self::all().len()
    }
}

// ============================================================================
// Tests
// ============================================================================
