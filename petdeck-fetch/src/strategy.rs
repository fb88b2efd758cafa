//! Image source trait.
//!
//! An image source is one external provider that can produce a single image
//! URL per call. Sources are chained by [`crate::pipeline::ImagePipeline`]
//! and tried in the order they were added.

use async_trait::async_trait;

use crate::context::FetchContext;
use crate::error::FetchError;

/// A single provider of random image URLs.
///
/// ## Implementing a Source
///
/// ```ignore
/// struct RandomCatSource;
///
/// #[async_trait]
/// impl ImageSource for RandomCatSource {
///     fn id(&self) -> &str {
///         "cat.randomcat"
///     }
///
///     async fn fetch_image(&self, ctx: &FetchContext) -> Result<String, FetchError> {
///         let body = ctx.http.get_text("https://aws.random.cat/meow").await?;
///         parse_random_cat(&body)
///     }
/// }
/// ```
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Unique identifier for this source (e.g., "cat.thecatapi").
    ///
    /// Format: `{animal}.{provider}`
    fn id(&self) -> &str;

    /// Fetches one raw candidate URL.
    ///
    /// The URL is validated by the pipeline, so sources return whatever the
    /// provider handed back once it has been extracted from the payload.
    async fn fetch_image(&self, ctx: &FetchContext) -> Result<String, FetchError>;
}
