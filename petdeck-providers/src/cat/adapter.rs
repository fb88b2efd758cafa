//! Cat adapter.
//!
//! Breeds and facts come from catfact.ninja. Images come from a fallback
//! chain over three sources, with placekitten placeholders behind them, so
//! image fetches never fail.

use async_trait::async_trait;
use futures::future::try_join_all;
use petdeck_core::{Animal, BreedName, FactEntry, ImageResult};
use petdeck_fetch::{FetchContext, FetchError, ImagePipeline, ImageSource};
use tracing::{debug, info, instrument};

use super::fallback::{CAT_DEFAULT_BREEDS, CAT_FALLBACK_FACTS, placeholder_images};
use super::parser::{parse_breeds, parse_fact};
use super::sources::default_sources;
use crate::adapter::AnimalAdapter;

const CATFACT_BASE: &str = "https://catfact.ninja";

/// Adapter over catfact.ninja and the cat image chain.
pub struct CatAdapter {
    facts_base: String,
    pipeline: ImagePipeline,
}

impl CatAdapter {
    /// Creates the adapter against the public providers.
    pub fn new() -> Self {
        Self {
            facts_base: CATFACT_BASE.to_string(),
            pipeline: ImagePipeline::with_sources(default_sources()).with_placeholders(placeholder_images()),
        }
    }

    /// Points breed and fact requests at a different catfact host.
    pub fn with_facts_base(mut self, base: impl Into<String>) -> Self {
        self.facts_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Replaces the image chain, keeping the placekitten placeholders.
    pub fn with_sources(mut self, sources: Vec<Box<dyn ImageSource>>) -> Self {
        self.pipeline = ImagePipeline::with_sources(sources).with_placeholders(placeholder_images());
        self
    }

    /// Returns the image chain.
    pub fn pipeline(&self) -> &ImagePipeline {
        &self.pipeline
    }

    async fn fetch_fact(&self, ctx: &FetchContext) -> Result<FactEntry, FetchError> {
        let body = ctx.http.get_text(&format!("{}/fact", self.facts_base)).await?;
        parse_fact(&body)
    }
}

impl Default for CatAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnimalAdapter for CatAdapter {
    fn animal(&self) -> Animal {
        Animal::Cat
    }

    #[instrument(skip(self, ctx))]
    async fn fetch_breeds(&self, ctx: &FetchContext) -> Result<Vec<BreedName>, FetchError> {
        let body = ctx.http.get_text(&format!("{}/breeds", self.facts_base)).await?;
        let breeds = parse_breeds(&body)?;
        info!(count = breeds.len(), "Fetched cat breeds");
        Ok(breeds)
    }

    #[instrument(skip(self, ctx))]
    async fn fetch_facts(&self, ctx: &FetchContext, count: usize) -> Result<Vec<FactEntry>, FetchError> {
        let facts = try_join_all((0..count).map(|_| self.fetch_fact(ctx))).await?;
        info!(count = facts.len(), "Fetched cat facts");
        Ok(facts)
    }

    #[instrument(skip(self, ctx))]
    async fn fetch_images(
        &self,
        ctx: &FetchContext,
        count: usize,
        breed: Option<&str>,
    ) -> Result<Vec<ImageResult>, FetchError> {
        if let Some(breed) = breed {
            debug!(breed, "Cat image sources do not filter by breed, ignoring");
        }
        self.pipeline.execute_many(ctx, count).await
    }

    fn default_breeds(&self) -> Vec<BreedName> {
        CAT_DEFAULT_BREEDS.iter().map(ToString::to_string).collect()
    }

    fn fallback_facts(&self) -> Vec<FactEntry> {
        CAT_FALLBACK_FACTS.iter().map(ToString::to_string).collect()
    }
}
