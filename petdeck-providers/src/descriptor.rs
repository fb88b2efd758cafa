//! Animal descriptor system.
//!
//! A descriptor contains the static configuration for one animal:
//! - Display name
//! - Provider hosts the HTTP client may reach
//! - Default breeds
//! - How to build its adapter

use petdeck_core::{Animal, BreedName};
use std::sync::Arc;

use crate::adapter::AnimalAdapter;

// ============================================================================
// Animal Descriptor
// ============================================================================

/// Complete descriptor for an animal.
pub struct AnimalDescriptor {
    /// Animal identifier.
    pub animal: Animal,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Hosts the adapter talks to. Subdomains are implied.
    pub provider_domains: &'static [&'static str],
    /// Breeds shown when the provider's breed list is unavailable.
    pub default_breeds: &'static [&'static str],
    /// Function to build the adapter.
    pub build_adapter: fn() -> Arc<dyn AnimalAdapter>,
}

impl AnimalDescriptor {
    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        self.display_name
    }

    /// Builds the adapter for this animal.
    pub fn build_adapter(&self) -> Arc<dyn AnimalAdapter> {
        (self.build_adapter)()
    }

    /// Returns the default breeds as owned names.
    pub fn default_breeds(&self) -> Vec<BreedName> {
        self.default_breeds.iter().map(ToString::to_string).collect()
    }
}

impl std::fmt::Debug for AnimalDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimalDescriptor")
            .field("animal", &self.animal)
            .field("display_name", &self.display_name)
            .field("provider_domains", &self.provider_domains)
            .finish_non_exhaustive()
    }
}
