//! Cat image sources, tried in the order they are listed here.

use async_trait::async_trait;
use petdeck_fetch::{FetchContext, FetchError, ImageSource};
use tracing::instrument;

use super::parser::{parse_cataas, parse_random_cat, parse_thecatapi};

const THECATAPI_URL: &str = "https://api.thecatapi.com/v1/images/search";
const CATAAS_URL: &str = "https://cataas.com/cat?json=true";
const RANDOM_CAT_URL: &str = "https://aws.random.cat/meow";

// ============================================================================
// TheCatAPI
// ============================================================================

/// Primary cat image source.
pub struct TheCatApiSource {
    url: String,
}

impl TheCatApiSource {
    /// Creates the source against the public endpoint.
    pub fn new() -> Self {
        Self::with_url(THECATAPI_URL)
    }

    /// Creates the source against a custom endpoint.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for TheCatApiSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSource for TheCatApiSource {
    fn id(&self) -> &str {
        "cat.thecatapi"
    }

    #[instrument(skip(self, ctx))]
    async fn fetch_image(&self, ctx: &FetchContext) -> Result<String, FetchError> {
        let body = ctx.http.get_text(&self.url).await?;
        parse_thecatapi(&body)
    }
}

// ============================================================================
// Cataas
// ============================================================================

/// Second cat image source.
pub struct CataasSource {
    url: String,
}

impl CataasSource {
    /// Creates the source against the public endpoint.
    pub fn new() -> Self {
        Self::with_url(CATAAS_URL)
    }

    /// Creates the source against a custom endpoint.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for CataasSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSource for CataasSource {
    fn id(&self) -> &str {
        "cat.cataas"
    }

    #[instrument(skip(self, ctx))]
    async fn fetch_image(&self, ctx: &FetchContext) -> Result<String, FetchError> {
        let body = ctx.http.get_text(&self.url).await?;
        parse_cataas(&body)
    }
}

// ============================================================================
// random.cat
// ============================================================================

/// Last-resort cat image source.
pub struct RandomCatSource {
    url: String,
}

impl RandomCatSource {
    /// Creates the source against the public endpoint.
    pub fn new() -> Self {
        Self::with_url(RANDOM_CAT_URL)
    }

    /// Creates the source against a custom endpoint.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for RandomCatSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSource for RandomCatSource {
    fn id(&self) -> &str {
        "cat.randomcat"
    }

    #[instrument(skip(self, ctx))]
    async fn fetch_image(&self, ctx: &FetchContext) -> Result<String, FetchError> {
        let body = ctx.http.get_text(&self.url).await?;
        parse_random_cat(&body)
    }
}

/// Returns the default chain, in priority order.
pub fn default_sources() -> Vec<Box<dyn ImageSource>> {
    vec![
        Box::new(TheCatApiSource::new()),
        Box::new(CataasSource::new()),
        Box::new(RandomCatSource::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_order() {
        let ids: Vec<_> = default_sources().iter().map(|s| s.id().to_string()).collect();
        assert_eq!(ids, vec!["cat.thecatapi", "cat.cataas", "cat.randomcat"]);
    }

    #[tokio::test]
    async fn test_unreachable_source_errors() {
        let ctx = FetchContext::new();
        let source = TheCatApiSource::with_url("http://127.0.0.1:9/v1/images/search");
        assert!(source.fetch_image(&ctx).await.is_err());
    }
}
