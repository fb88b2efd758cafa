//! Dog descriptor.

use petdeck_core::Animal;
use std::sync::Arc;

use super::adapter::DogAdapter;
use super::fallback::DOG_DEFAULT_BREEDS;
use crate::adapter::AnimalAdapter;
use crate::descriptor::AnimalDescriptor;

/// Returns the descriptor for dogs.
pub fn dog_descriptor() -> AnimalDescriptor {
    AnimalDescriptor {
        animal: Animal::Dog,
        display_name: "Dog",
        provider_domains: &["dog.ceo", "dog-api.kinduff.com"],
        default_breeds: &DOG_DEFAULT_BREEDS,
        build_adapter: build_dog_adapter,
    }
}

fn build_dog_adapter() -> Arc<dyn AnimalAdapter> {
    Arc::new(DogAdapter::new())
}
