//! Dog adapter.
//!
//! Breeds and images come from dog.ceo, facts from kinduff's dog API.
//! Image failures are absorbed here: any transport or schema problem is
//! replaced by generated placedog images, so the result always has
//! exactly the requested length.

use async_trait::async_trait;
use futures::future::try_join_all;
use petdeck_core::{Animal, BreedName, FactEntry, ImageResult};
use petdeck_fetch::{FetchContext, FetchError};
use tracing::{debug, info, instrument, warn};

use super::fallback::{
    DEFAULT_FALLBACK_FACT_COUNT, DOG_DEFAULT_BREEDS, placeholder_images, random_single_fact,
    sample_fallback_facts,
};
use super::parser::{parse_breeds, parse_fact, parse_images};
use crate::adapter::AnimalAdapter;

const DOG_CEO_BASE: &str = "https://dog.ceo/api";
const DOG_FACTS_URL: &str = "https://dog-api.kinduff.com/api/facts";

/// Builds the dog.ceo path segment for a breed.
///
/// `"Bulldog French"` becomes `"bulldog/french"`, the main/sub form dog.ceo
/// expects.
pub fn breed_path(breed: &str) -> String {
    breed.trim().to_lowercase().replace(' ', "/")
}

/// Adapter over dog.ceo and the kinduff facts API.
pub struct DogAdapter {
    images_base: String,
    facts_url: String,
}

impl DogAdapter {
    /// Creates the adapter against the public providers.
    pub fn new() -> Self {
        Self {
            images_base: DOG_CEO_BASE.to_string(),
            facts_url: DOG_FACTS_URL.to_string(),
        }
    }

    /// Points breed and image requests at a different dog.ceo API root.
    pub fn with_images_base(mut self, base: impl Into<String>) -> Self {
        self.images_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Points fact requests at a different facts endpoint.
    pub fn with_facts_url(mut self, url: impl Into<String>) -> Self {
        self.facts_url = url.into();
        self
    }

    /// Returns the image list URL for `count` images.
    pub fn images_url(&self, count: usize, breed: Option<&str>) -> String {
        match breed {
            Some(breed) => format!("{}/breed/{}/images/random/{}", self.images_base, breed_path(breed), count),
            None => format!("{}/breeds/image/random/{}", self.images_base, count),
        }
    }

    async fn fetch_provider_images(
        &self,
        ctx: &FetchContext,
        count: usize,
        breed: Option<&str>,
    ) -> Result<Vec<ImageResult>, FetchError> {
        let body = ctx.http.get_text(&self.images_url(count, breed)).await?;
        collect_images(parse_images(&body)?, breed)
    }

    async fn fetch_fact(&self, ctx: &FetchContext) -> Result<FactEntry, FetchError> {
        let body = ctx.http.get_text(&format!("{}?number=1", self.facts_url)).await?;
        match parse_fact(&body)? {
            Some(fact) => Ok(fact),
            None => {
                debug!("Dog fact response unsuccessful, substituting fallback fact");
                Ok(random_single_fact())
            }
        }
    }
}

/// Keeps the well-formed URLs of a provider batch.
///
/// A batch with none left is [`FetchError::NoImages`] for the breed, or
/// "random" for an unfiltered request.
fn collect_images(urls: Vec<String>, breed: Option<&str>) -> Result<Vec<ImageResult>, FetchError> {
    let images: Vec<ImageResult> = urls
        .into_iter()
        .filter_map(|url| match ImageResult::parse(url) {
            Ok(image) => Some(image),
            Err(e) => {
                debug!(error = %e, "Skipping malformed dog image URL");
                None
            }
        })
        .collect();

    if images.is_empty() {
        return Err(FetchError::NoImages(breed.unwrap_or("random").to_string()));
    }
    Ok(images)
}

impl Default for DogAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnimalAdapter for DogAdapter {
    fn animal(&self) -> Animal {
        Animal::Dog
    }

    #[instrument(skip(self, ctx))]
    async fn fetch_breeds(&self, ctx: &FetchContext) -> Result<Vec<BreedName>, FetchError> {
        let body = ctx.http.get_text(&format!("{}/breeds/list/all", self.images_base)).await?;
        let breeds = parse_breeds(&body)?;
        info!(count = breeds.len(), "Fetched dog breeds");
        Ok(breeds)
    }

    #[instrument(skip(self, ctx))]
    async fn fetch_facts(&self, ctx: &FetchContext, count: usize) -> Result<Vec<FactEntry>, FetchError> {
        let facts = try_join_all((0..count).map(|_| self.fetch_fact(ctx))).await?;
        info!(count = facts.len(), "Fetched dog facts");
        Ok(facts)
    }

    #[instrument(skip(self, ctx))]
    async fn fetch_images(
        &self,
        ctx: &FetchContext,
        count: usize,
        breed: Option<&str>,
    ) -> Result<Vec<ImageResult>, FetchError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut images = match self.fetch_provider_images(ctx, count, breed).await {
            Ok(images) => images,
            Err(e) => {
                warn!(error = %e, "Dog images unavailable, using placeholders");
                return Ok(placeholder_images(count));
            }
        };

        if images.len() < count {
            debug!(received = images.len(), count, "Padding short dog image list with placeholders");
            images.extend(placeholder_images(count - images.len()));
        }
        images.truncate(count);
        Ok(images)
    }

    fn default_breeds(&self) -> Vec<BreedName> {
        DOG_DEFAULT_BREEDS.iter().map(ToString::to_string).collect()
    }

    fn fallback_facts(&self) -> Vec<FactEntry> {
        sample_fallback_facts(DEFAULT_FALLBACK_FACT_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petdeck_core::is_valid_image_url;
    use std::time::Duration;

    const DEAD: &str = "http://127.0.0.1:9";

    fn offline_adapter() -> DogAdapter {
        DogAdapter::new()
            .with_images_base(format!("{DEAD}/api"))
            .with_facts_url(format!("{DEAD}/api/facts"))
    }

    fn ctx() -> FetchContext {
        FetchContext::builder().timeout(Duration::from_secs(2)).build()
    }

    #[test]
    fn test_breed_path() {
        assert_eq!(breed_path("Labrador"), "labrador");
        assert_eq!(breed_path("German Shepherd"), "german/shepherd");
        assert_eq!(breed_path("  hound  "), "hound");
    }

    #[test]
    fn test_images_url() {
        let adapter = DogAdapter::new();
        assert_eq!(adapter.images_url(5, None), "https://dog.ceo/api/breeds/image/random/5");
        assert_eq!(
            adapter.images_url(3, Some("Bulldog French")),
            "https://dog.ceo/api/breed/bulldog/french/images/random/3"
        );
    }

    #[test]
    fn test_collect_images_skips_malformed() {
        let urls = vec!["/relative.jpg".to_string(), "https://images.dog.ceo/breeds/pug/a.jpg".to_string()];
        let images = collect_images(urls, None).unwrap();
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn test_empty_batch_names_the_selection() {
        let err = collect_images(Vec::new(), Some("beagle")).unwrap_err();
        assert!(matches!(&err, FetchError::NoImages(breed) if breed == "beagle"));
        assert_eq!(err.to_string(), "No images received from API for beagle");

        let err = collect_images(vec!["not a url".to_string()], None).unwrap_err();
        assert_eq!(err.to_string(), "No images received from API for random");
    }

    #[tokio::test]
    async fn test_images_unreachable_yield_exact_count() {
        let adapter = offline_adapter();
        for count in [1, 4, 20] {
            let images = adapter.fetch_images(&ctx(), count, Some("Beagle")).await.unwrap();
            assert_eq!(images.len(), count);
            assert!(images.iter().all(|i| i.as_str().starts_with("https://placedog.net/")));
            assert!(images.iter().all(|i| is_valid_image_url(i.as_str())));
        }
    }

    #[tokio::test]
    async fn test_facts_transport_failure_propagates() {
        let err = offline_adapter().fetch_facts(&ctx(), 3).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_zero_facts_makes_no_requests() {
        let facts = offline_adapter().fetch_facts(&ctx(), 0).await.unwrap();
        assert!(facts.is_empty());
    }

    #[test]
    fn test_fallback_facts_sampled() {
        let facts = DogAdapter::new().fallback_facts();
        assert_eq!(facts.len(), 5);
    }

    #[test]
    fn test_default_breeds() {
        assert_eq!(
            DogAdapter::new().default_breeds(),
            vec!["Labrador", "German Shepherd", "Golden Retriever", "Bulldog", "Beagle"]
        );
    }
}
