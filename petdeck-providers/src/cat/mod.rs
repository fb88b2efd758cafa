//! Cat providers.
//!
//! - catfact.ninja for breeds and facts
//! - thecatapi.com, cataas.com and random.cat for images, in that order

mod adapter;
mod descriptor;
pub mod fallback;
pub(crate) mod parser;
mod sources;

pub use adapter::CatAdapter;
pub use descriptor::cat_descriptor;
pub use sources::{CataasSource, RandomCatSource, TheCatApiSource, default_sources};
