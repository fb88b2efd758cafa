//! Cat descriptor.

use petdeck_core::Animal;
use std::sync::Arc;

use super::adapter::CatAdapter;
use super::fallback::CAT_DEFAULT_BREEDS;
use crate::adapter::AnimalAdapter;
use crate::descriptor::AnimalDescriptor;

/// Returns the descriptor for cats.
pub fn cat_descriptor() -> AnimalDescriptor {
    AnimalDescriptor {
        animal: Animal::Cat,
        display_name: "Cat",
        provider_domains: &["catfact.ninja", "thecatapi.com", "cataas.com", "random.cat"],
        default_breeds: &CAT_DEFAULT_BREEDS,
        build_adapter: build_cat_adapter,
    }
}

fn build_cat_adapter() -> Arc<dyn AnimalAdapter> {
    Arc::new(CatAdapter::new())
}
