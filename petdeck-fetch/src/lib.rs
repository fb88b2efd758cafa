// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PetDeck` Fetch
//!
//! HTTP host API, fallback chain and retry policy for `PetDeck`.
//!
//! ## Host APIs
//!
//! - [`host::http`] - HTTP client with tracing and domain allowlist
//!
//! ## Fallback Chain
//!
//! - [`strategy::ImageSource`] - Trait for one image provider
//! - [`pipeline::ImagePipeline`] - Tries sources in order, then placeholders
//! - [`context::FetchContext`] - Provides access to host APIs and settings
//!
//! ## Retry & Refresh
//!
//! - [`retry::RetryPolicy`] - Bounded retry with linear backoff
//! - [`generation::RequestGeneration`] - Drops results from superseded refreshes
//!
//! ## Example
//!
//! ```ignore
//! use petdeck_fetch::{FetchContext, ImagePipeline};
//!
//! let ctx = FetchContext::new();
//! let pipeline = ImagePipeline::with_sources(vec![
//!     Box::new(TheCatApiSource::new()),
//!     Box::new(CataasSource::new()),
//! ])
//! .with_placeholders(placeholders);
//!
//! let outcome = pipeline.execute(&ctx).await;
//! ```

pub mod context;
pub mod error;
pub mod generation;
pub mod host;
pub mod pipeline;
pub mod retry;
pub mod strategy;

// Re-export key types at crate root

// Errors
pub use error::{FetchError, HttpError};

// Host APIs
pub use host::http::HttpClient;

// Chain & Retry
pub use context::{FetchContext, FetchContextBuilder, FetchSettings};
pub use generation::{GenerationTicket, RequestGeneration};
pub use pipeline::{ChainAttempt, ChainOutcome, ImageOrigin, ImagePipeline};
pub use retry::RetryPolicy;
pub use strategy::ImageSource;
