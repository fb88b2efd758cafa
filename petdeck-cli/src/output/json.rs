//! JSON output formatting.

use anyhow::Result;
use petdeck_core::{Animal, FactCategory, FactEntry, GalleryType, ImageResult};
use petdeck_providers::FactsOutcome;
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for a breed list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedsOutput<'a> {
    pub animal: Animal,
    pub breeds: &'a [String],
}

/// JSON output for an image batch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesOutput<'a> {
    pub animal: Animal,
    pub gallery_type: GalleryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<&'a str>,
    pub images: &'a [ImageResult],
}

/// One fact with its category.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactOutput<'a> {
    pub fact: &'a FactEntry,
    pub category: FactCategory,
}

/// JSON output for a facts batch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactsOutput<'a> {
    pub animal: Animal,
    pub facts: Vec<FactOutput<'a>>,
    pub fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

impl<'a> FactsOutput<'a> {
    /// Builds the output from a facts outcome.
    pub fn new(animal: Animal, outcome: &'a FactsOutcome) -> Self {
        Self {
            animal,
            facts: outcome
                .facts
                .iter()
                .map(|fact| FactOutput {
                    fact,
                    category: FactCategory::classify(fact),
                })
                .collect(),
            fallback: outcome.is_fallback(),
            error: outcome.error.as_deref(),
        }
    }
}

/// JSON output for one watch refresh.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchFrameOutput<'a> {
    pub generation: u64,
    pub refreshed_at: String,
    pub images: &'a [ImageResult],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_error: Option<&'a str>,
    pub facts: FactsOutput<'a>,
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }
}
