//! Dog providers.
//!
//! - dog.ceo for breeds and images (with breed filtering)
//! - dog-api.kinduff.com for facts

mod adapter;
mod descriptor;
pub mod fallback;
pub(crate) mod parser;

pub use adapter::{DogAdapter, breed_path};
pub use descriptor::dog_descriptor;
