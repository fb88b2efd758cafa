//! Animal API facade.
//!
//! The single entry point the UI layers call. It maps each animal to its
//! adapter and applies the per-operation failure policy:
//!
//! | Operation | On failure |
//! |-----------|------------|
//! | [`AnimalApi::fetch_breeds`] | Default breed list |
//! | [`AnimalApi::fetch_images`] | Retried, then propagated |
//! | [`AnimalApi::fetch_facts`] | Propagated |
//! | [`AnimalApi::facts_or_fallback`] | Fallback facts plus a user message |

use petdeck_core::{Animal, BreedName, FactEntry, GalleryType, ImageResult};
use petdeck_fetch::{FetchContext, FetchError};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::adapter::AnimalAdapter;
use crate::registry::AnimalRegistry;

// ============================================================================
// Facts Outcome
// ============================================================================

/// Facts to show, with the error that forced a fallback if there was one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactsOutcome {
    /// Facts to display. Never empty when `error` is set.
    pub facts: Vec<FactEntry>,
    /// User-facing error message when the provider failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FactsOutcome {
    /// Returns true if the facts are fallback content.
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

// ============================================================================
// Animal API
// ============================================================================

/// Facade over every animal adapter.
pub struct AnimalApi {
    ctx: FetchContext,
    adapters: HashMap<Animal, Arc<dyn AnimalAdapter>>,
}

impl AnimalApi {
    /// Creates the facade with the built-in adapters and an HTTP client
    /// restricted to the registered provider hosts.
    pub fn new() -> Self {
        let ctx = FetchContext::builder()
            .allowed_domains(AnimalRegistry::provider_domains())
            .build();
        Self::with_context(ctx)
    }

    /// Creates the facade with the built-in adapters and a custom context.
    pub fn with_context(ctx: FetchContext) -> Self {
        let adapters = AnimalRegistry::all()
            .iter()
            .map(|desc| (desc.animal, desc.build_adapter()))
            .collect();
        Self { ctx, adapters }
    }

    /// Registers an adapter, replacing any existing one for its animal.
    pub fn with_adapter(mut self, adapter: Arc<dyn AnimalAdapter>) -> Self {
        self.register(adapter);
        self
    }

    /// Registers an adapter, replacing any existing one for its animal.
    pub fn register(&mut self, adapter: Arc<dyn AnimalAdapter>) {
        self.adapters.insert(adapter.animal(), adapter);
    }

    /// Returns the fetch context.
    pub fn context(&self) -> &FetchContext {
        &self.ctx
    }

    fn adapter(&self, animal: Animal) -> Result<&dyn AnimalAdapter, FetchError> {
        self.adapters
            .get(&animal)
            .map(|adapter| adapter.as_ref())
            .ok_or_else(|| FetchError::NoAdapter(animal.to_string()))
    }

    /// Fetches the breed list. Never fails and never returns an empty list.
    #[instrument(skip(self))]
    pub async fn fetch_breeds(&self, animal: Animal) -> Vec<BreedName> {
        let adapter = match self.adapter(animal) {
            Ok(adapter) => adapter,
            Err(e) => {
                warn!(%animal, error = %e, "Using default breeds");
                return self.default_breeds(animal);
            }
        };

        match adapter.fetch_breeds(&self.ctx).await {
            Ok(breeds) if !breeds.is_empty() => breeds,
            Ok(_) => {
                warn!(%animal, "Provider returned no breeds, using defaults");
                adapter.default_breeds()
            }
            Err(e) => {
                warn!(%animal, error = %e, "Failed to fetch breeds, using defaults");
                adapter.default_breeds()
            }
        }
    }

    /// Returns the default breeds for `animal`.
    pub fn default_breeds(&self, animal: Animal) -> Vec<BreedName> {
        match self.adapter(animal) {
            Ok(adapter) => adapter.default_breeds(),
            Err(_) => AnimalRegistry::get(animal)
                .map(|desc| desc.default_breeds())
                .unwrap_or_default(),
        }
    }

    /// Fetches `count` images.
    ///
    /// With [`GalleryType::Breed`] the breed is passed to the adapter as a
    /// filter hint. The adapter call runs under the context's retry policy;
    /// the last error is returned once it is exhausted.
    #[instrument(skip(self))]
    pub async fn fetch_images(
        &self,
        animal: Animal,
        count: usize,
        breed: Option<&str>,
        gallery: GalleryType,
    ) -> Result<Vec<ImageResult>, FetchError> {
        let adapter = self.adapter(animal)?;
        let filter = gallery.breed_filter(breed);
        let ctx = &self.ctx;

        let images = ctx
            .retry_policy()
            .run("fetch_images", move |_| adapter.fetch_images(ctx, count, filter))
            .await?;

        info!(%animal, count = images.len(), "Fetched images");
        Ok(images)
    }

    /// Fetches `count` facts, propagating provider failures.
    #[instrument(skip(self))]
    pub async fn fetch_facts(&self, animal: Animal, count: usize) -> Result<Vec<FactEntry>, FetchError> {
        self.adapter(animal)?.fetch_facts(&self.ctx, count).await
    }

    /// Returns the static fallback facts for `animal`.
    ///
    /// Cats get the same ten facts every time; dogs get five sampled from
    /// a larger pool.
    pub fn fallback_facts(&self, animal: Animal) -> Vec<FactEntry> {
        self.adapter(animal)
            .map(|adapter| adapter.fallback_facts())
            .unwrap_or_default()
    }

    /// Fetches facts, substituting fallback facts on failure.
    pub async fn facts_or_fallback(&self, animal: Animal, count: usize) -> FactsOutcome {
        match self.fetch_facts(animal, count).await {
            Ok(facts) => FactsOutcome { facts, error: None },
            Err(e) => {
                warn!(%animal, error = %e, "Failed to fetch facts, using fallback facts");
                FactsOutcome {
                    facts: self.fallback_facts(animal),
                    error: Some(e.user_message()),
                }
            }
        }
    }
}

impl Default for AnimalApi {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AnimalApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut animals: Vec<_> = self.adapters.keys().collect();
        animals.sort();
        f.debug_struct("AnimalApi")
            .field("ctx", &self.ctx)
            .field("adapters", &animals)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat::{CatAdapter, CataasSource, RandomCatSource, TheCatApiSource};
    use crate::dog::DogAdapter;
    use async_trait::async_trait;
    use petdeck_fetch::RetryPolicy;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    const DEAD: &str = "http://127.0.0.1:9";

    /// Adapter that fails a fixed number of image calls before succeeding
    /// and records the breed hints it receives.
    struct FlakyAdapter {
        failures_left: AtomicU32,
        calls: AtomicU32,
        hints: Mutex<Vec<Option<String>>>,
    }

    impl FlakyAdapter {
        fn new(failures: u32) -> Self {
            Self {
                failures_left: AtomicU32::new(failures),
                calls: AtomicU32::new(0),
                hints: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AnimalAdapter for FlakyAdapter {
        fn animal(&self) -> Animal {
            Animal::Dog
        }

        async fn fetch_breeds(&self, _ctx: &FetchContext) -> Result<Vec<BreedName>, FetchError> {
            Ok(Vec::new())
        }

        async fn fetch_facts(&self, _ctx: &FetchContext, _count: usize) -> Result<Vec<FactEntry>, FetchError> {
            Err(FetchError::Timeout(30))
        }

        async fn fetch_images(
            &self,
            _ctx: &FetchContext,
            count: usize,
            breed: Option<&str>,
        ) -> Result<Vec<ImageResult>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.hints.lock().unwrap().push(breed.map(String::from));
            if self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(FetchError::InvalidResponse("flaky".to_string()));
            }
            Ok((0..count)
                .map(|i| ImageResult::parse(format!("https://images.dog.ceo/{i}.jpg")).unwrap())
                .collect())
        }

        fn default_breeds(&self) -> Vec<BreedName> {
            vec!["Beagle".to_string()]
        }

        fn fallback_facts(&self) -> Vec<FactEntry> {
            vec!["Dogs sweat through the pads of their feet.".to_string()]
        }
    }

    fn fast_ctx() -> FetchContext {
        FetchContext::builder()
            .timeout(Duration::from_secs(2))
            .retry(RetryPolicy::new(2).with_base_delay(Duration::from_millis(10)))
            .build()
    }

    fn offline_api() -> AnimalApi {
        AnimalApi::with_context(fast_ctx())
            .with_adapter(Arc::new(
                DogAdapter::new()
                    .with_images_base(format!("{DEAD}/api"))
                    .with_facts_url(format!("{DEAD}/api/facts")),
            ))
            .with_adapter(Arc::new(CatAdapter::new().with_facts_base(DEAD).with_sources(vec![
                Box::new(TheCatApiSource::with_url(format!("{DEAD}/search"))),
                Box::new(CataasSource::with_url(format!("{DEAD}/cat"))),
                Box::new(RandomCatSource::with_url(format!("{DEAD}/meow"))),
            ])))
    }

    #[tokio::test]
    async fn test_breeds_fall_back_to_defaults() {
        let api = offline_api();
        assert_eq!(
            api.fetch_breeds(Animal::Dog).await,
            vec!["Labrador", "German Shepherd", "Golden Retriever", "Bulldog", "Beagle"]
        );
        assert_eq!(api.fetch_breeds(Animal::Cat).await.len(), 5);
    }

    #[tokio::test]
    async fn test_empty_breed_list_uses_defaults() {
        let api = AnimalApi::with_context(fast_ctx()).with_adapter(Arc::new(FlakyAdapter::new(0)));
        assert_eq!(api.fetch_breeds(Animal::Dog).await, vec!["Beagle"]);
    }

    #[tokio::test]
    async fn test_images_never_fail_when_offline() {
        let api = offline_api();
        let cats = api.fetch_images(Animal::Cat, 2, None, GalleryType::Random).await.unwrap();
        let dogs = api
            .fetch_images(Animal::Dog, 3, Some("Beagle"), GalleryType::Breed)
            .await
            .unwrap();
        assert_eq!(cats.len(), 2);
        assert_eq!(dogs.len(), 3);
    }

    #[tokio::test]
    async fn test_images_retried_once() {
        let adapter = Arc::new(FlakyAdapter::new(1));
        let api = AnimalApi::with_context(fast_ctx()).with_adapter(adapter.clone());

        let images = api.fetch_images(Animal::Dog, 4, None, GalleryType::Random).await.unwrap();

        assert_eq!(images.len(), 4);
        assert_eq!(adapter.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_images_error_after_retries_exhausted() {
        let adapter = Arc::new(FlakyAdapter::new(5));
        let api = AnimalApi::with_context(fast_ctx()).with_adapter(adapter.clone());

        let err = api
            .fetch_images(Animal::Dog, 1, None, GalleryType::Random)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::InvalidResponse(_)));
        assert_eq!(adapter.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_gallery_type_controls_breed_hint() {
        let adapter = Arc::new(FlakyAdapter::new(0));
        let api = AnimalApi::with_context(fast_ctx()).with_adapter(adapter.clone());

        api.fetch_images(Animal::Dog, 1, Some("Beagle"), GalleryType::Random).await.unwrap();
        api.fetch_images(Animal::Dog, 1, Some("Beagle"), GalleryType::Breed).await.unwrap();

        let hints = adapter.hints.lock().unwrap().clone();
        assert_eq!(hints, vec![None, Some("Beagle".to_string())]);
    }

    #[tokio::test]
    async fn test_facts_or_fallback() {
        let api = AnimalApi::with_context(fast_ctx()).with_adapter(Arc::new(FlakyAdapter::new(0)));
        let outcome = api.facts_or_fallback(Animal::Dog, 3).await;

        assert!(outcome.is_fallback());
        assert_eq!(outcome.facts, vec!["Dogs sweat through the pads of their feet."]);
        assert_eq!(
            outcome.error.as_deref(),
            Some("Network error: Please check your internet connection")
        );
    }

    #[tokio::test]
    async fn test_fetch_facts_propagates() {
        let api = offline_api();
        assert!(api.fetch_facts(Animal::Cat, 2).await.is_err());
    }

    #[test]
    fn test_fallback_facts() {
        let api = AnimalApi::with_context(fast_ctx());
        assert_eq!(api.fallback_facts(Animal::Cat).len(), 10);
        assert_eq!(api.fallback_facts(Animal::Cat), api.fallback_facts(Animal::Cat));
        assert_eq!(api.fallback_facts(Animal::Dog).len(), 5);
    }

    #[test]
    fn test_new_uses_default_retry() {
        let api = AnimalApi::new();
        assert_eq!(api.context().retry_policy().max_attempts, 2);
    }
}
