//! Fallback chain for image sources.
//!
//! The pipeline tries each source in order until one yields a valid URL.
//! If every source fails it returns a random entry from a fixed placeholder
//! set, so an image slot is always filled.

use petdeck_core::{ImageResult, is_valid_image_url};
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use crate::context::FetchContext;
use crate::error::FetchError;
use crate::strategy::ImageSource;

// ============================================================================
// Chain Attempt
// ============================================================================

/// Record of a single source attempt.
#[derive(Debug, Clone)]
pub struct ChainAttempt {
    /// The source that was attempted.
    pub source_id: String,
    /// Whether the attempt succeeded.
    pub success: bool,
    /// Error if the attempt failed.
    pub error: Option<String>,
    /// How long the attempt took.
    pub duration: Duration,
}

impl ChainAttempt {
    /// Creates a successful attempt record.
    pub fn success(source_id: impl Into<String>, duration: Duration) -> Self {
        Self {
            source_id: source_id.into(),
            success: true,
            error: None,
            duration,
        }
    }

    /// Creates a failed attempt record.
    pub fn failure(source_id: impl Into<String>, error: impl Into<String>, duration: Duration) -> Self {
        Self {
            source_id: source_id.into(),
            success: false,
            error: Some(error.into()),
            duration,
        }
    }
}

// ============================================================================
// Chain Outcome
// ============================================================================

/// Where the image in a [`ChainOutcome`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOrigin {
    /// A real provider.
    Source(String),
    /// The placeholder set.
    Placeholder,
}

/// The outcome of one traversal of the chain.
#[derive(Debug)]
pub struct ChainOutcome {
    /// The image, or an error if there was nothing to fall back to.
    pub result: Result<ImageResult, FetchError>,
    /// Where the image came from.
    pub origin: Option<ImageOrigin>,
    /// All attempts made.
    pub attempts: Vec<ChainAttempt>,
    /// Total duration of all attempts.
    pub duration: Duration,
}

impl ChainOutcome {
    /// Returns true if the image is a placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.origin, Some(ImageOrigin::Placeholder))
    }

    /// Returns the successful source ID, if any.
    pub fn successful_source(&self) -> Option<&str> {
        match &self.origin {
            Some(ImageOrigin::Source(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Returns the number of sources that were tried.
    pub fn attempts_count(&self) -> usize {
        self.attempts.len()
    }

    /// Returns all errors that occurred.
    pub fn errors(&self) -> Vec<&str> {
        self.attempts
            .iter()
            .filter_map(|a| a.error.as_deref())
            .collect()
    }
}

// ============================================================================
// Image Pipeline
// ============================================================================

/// An ordered chain of image sources with a placeholder fallback.
pub struct ImagePipeline {
    sources: Vec<Box<dyn ImageSource>>,
    placeholders: Vec<ImageResult>,
}

impl ImagePipeline {
    /// Creates an empty pipeline with no placeholders.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            placeholders: Vec::new(),
        }
    }

    /// Creates a pipeline with the given sources, tried in the given order.
    pub fn with_sources(sources: Vec<Box<dyn ImageSource>>) -> Self {
        Self {
            sources,
            placeholders: Vec::new(),
        }
    }

    /// Sets the placeholder set used when every source fails.
    pub fn with_placeholders(mut self, placeholders: Vec<ImageResult>) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Returns the number of sources in the chain.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if the chain has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Returns the placeholder set.
    pub fn placeholders(&self) -> &[ImageResult] {
        &self.placeholders
    }

    fn pick_placeholder(&self) -> Option<ImageResult> {
        self.placeholders.choose(&mut rand::thread_rng()).cloned()
    }

    /// Runs one traversal of the chain.
    ///
    /// Sources are tried strictly in order and never retried. A source is
    /// exhausted by an error or by a URL that fails validation.
    #[instrument(skip(self, ctx), fields(sources = self.sources.len()))]
    pub async fn execute(&self, ctx: &FetchContext) -> ChainOutcome {
        let start = Instant::now();
        let mut attempts = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let source_id = source.id();
            let attempt_start = Instant::now();
            debug!(source = %source_id, "Trying image source");

            let checked = source.fetch_image(ctx).await.and_then(|url| {
                if is_valid_image_url(&url) {
                    ImageResult::parse(url).map_err(|e| FetchError::InvalidResponse(e.to_string()))
                } else {
                    Err(FetchError::InvalidResponse(format!("Invalid image URL: {:?}", url)))
                }
            });

            let duration = attempt_start.elapsed();
            match checked {
                Ok(image) => {
                    debug!(source = %source_id, duration = ?duration, "Image source succeeded");
                    attempts.push(ChainAttempt::success(source_id, duration));
                    return ChainOutcome {
                        result: Ok(image),
                        origin: Some(ImageOrigin::Source(source_id.to_string())),
                        attempts,
                        duration: start.elapsed(),
                    };
                }
                Err(error) => {
                    warn!(source = %source_id, error = %error, duration = ?duration, "Image source failed");
                    attempts.push(ChainAttempt::failure(source_id, error.to_string(), duration));
                }
            }
        }

        match self.pick_placeholder() {
            Some(image) => {
                info!(tried = attempts.len(), "All image sources failed, using placeholder");
                ChainOutcome {
                    result: Ok(image),
                    origin: Some(ImageOrigin::Placeholder),
                    attempts,
                    duration: start.elapsed(),
                }
            }
            None => {
                warn!("All image sources failed and no placeholder is configured");
                ChainOutcome {
                    result: Err(FetchError::AllSourcesFailed),
                    origin: None,
                    attempts,
                    duration: start.elapsed(),
                }
            }
        }
    }

    /// Fills `count` slots, each with its own sequential traversal.
    pub async fn execute_many(&self, ctx: &FetchContext, count: usize) -> Result<Vec<ImageResult>, FetchError> {
        let mut images = Vec::with_capacity(count);
        for slot in 0..count {
            let outcome = self.execute(ctx).await;
            debug!(slot, attempts = outcome.attempts_count(), placeholder = outcome.is_placeholder(), "Image slot filled");
            images.push(outcome.result?);
        }
        Ok(images)
    }
}

impl Default for ImagePipeline {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
