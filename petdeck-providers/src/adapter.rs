//! Animal adapter trait.
//!
//! An adapter wraps every provider that serves one animal and normalizes
//! their responses into the shared content types. The facade in
//! [`crate::api`] picks an adapter per animal.

use async_trait::async_trait;
use petdeck_core::{Animal, BreedName, FactEntry, ImageResult};
use petdeck_fetch::{FetchContext, FetchError};

/// Uniform contract over one animal's providers.
///
/// ## Implementing an Adapter
///
/// ```ignore
/// struct OwlAdapter;
///
/// #[async_trait]
/// impl AnimalAdapter for OwlAdapter {
///     fn animal(&self) -> Animal { Animal::Cat }
///
///     async fn fetch_breeds(&self, ctx: &FetchContext) -> Result<Vec<BreedName>, FetchError> {
///         let body = ctx.http.get_text("https://owls.example/breeds").await?;
///         parse_owl_breeds(&body)
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait AnimalAdapter: Send + Sync {
    /// The animal this adapter serves.
    fn animal(&self) -> Animal;

    /// Fetches the provider's breed list.
    async fn fetch_breeds(&self, ctx: &FetchContext) -> Result<Vec<BreedName>, FetchError>;

    /// Fetches `count` facts.
    ///
    /// Implementations issue one request per fact concurrently and keep
    /// issuance order. Any transport failure fails the whole call.
    async fn fetch_facts(&self, ctx: &FetchContext, count: usize) -> Result<Vec<FactEntry>, FetchError>;

    /// Fetches `count` image URLs, optionally filtered by breed.
    ///
    /// Adapters that cannot filter by breed ignore the hint.
    async fn fetch_images(
        &self,
        ctx: &FetchContext,
        count: usize,
        breed: Option<&str>,
    ) -> Result<Vec<ImageResult>, FetchError>;

    /// Breeds shown when the provider's breed list is unavailable. Never empty.
    fn default_breeds(&self) -> Vec<BreedName>;

    /// Facts shown when the provider's facts are unavailable. Never empty.
    fn fallback_facts(&self) -> Vec<FactEntry>;
}
