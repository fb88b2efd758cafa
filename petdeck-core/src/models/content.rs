//! Normalized provider content: images, facts and breeds.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::error::CoreError;

/// One fact about an animal. Empty strings are tolerated.
pub type FactEntry = String;

/// Breed identifier as cased by the provider.
///
/// Casing is normalized only for display via [`display_breed`].
pub type BreedName = String;

// ============================================================================
// Image Result
// ============================================================================

/// A validated absolute image URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageResult(String);

impl ImageResult {
    /// Validates and wraps a URL.
    ///
    /// The URL must parse and use the `http` or `https` scheme.
    pub fn parse(url: impl Into<String>) -> Result<Self, CoreError> {
        let url = url.into();
        match Url::parse(&url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(Self(url)),
            _ => Err(CoreError::InvalidUrl(url)),
        }
    }

    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the result, returning the URL.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ImageResult {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ImageResult> for String {
    fn from(value: ImageResult) -> Self {
        value.0
    }
}

impl AsRef<str> for ImageResult {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Fact Category
// ============================================================================

/// Keyword classification of a fact, used when tabulating facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactCategory {
    /// Sleeping, eating and daily habits.
    Behavior,
    /// Breed and species trivia.
    #[serde(rename = "Breed Info")]
    BreedInfo,
    /// Senses and physical abilities.
    Abilities,
    /// Historical facts.
    History,
    /// Body and health.
    Anatomy,
    /// Anything else.
    General,
}

impl FactCategory {
    /// Keyword table, checked in order. First match wins.
    const KEYWORDS: &'static [(FactCategory, &'static [&'static str])] = &[
        (Self::Behavior, &["sleep", "hour", "eat", "food"]),
        (
            Self::BreedInfo,
            &["breed", "species", "persian", "siamese", "labrador", "greyhound"],
        ),
        (
            Self::Abilities,
            &["sense", "smell", "hear", "see", "ability", "whiskers"],
        ),
        (
            Self::History,
            &["year", "old", "history", "ancient", "middle ages"],
        ),
        (Self::Anatomy, &["teeth", "bone", "muscle", "health", "nose"]),
    ];

    /// Classifies a fact by case-insensitive keyword match.
    pub fn classify(fact: &str) -> Self {
        let lower = fact.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map_or(Self::General, |(category, _)| *category)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Behavior => "Behavior",
            Self::BreedInfo => "Breed Info",
            Self::Abilities => "Abilities",
            Self::History => "History",
            Self::Anatomy => "Anatomy",
            Self::General => "General",
        }
    }
}

impl fmt::Display for FactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Breed Display
// ============================================================================

/// Title-cases a breed for display ("german shepherd" -> "German Shepherd").
pub fn display_breed(breed: &str) -> String {
    breed
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_result_parse() {
        assert!(ImageResult::parse("https://cdn2.thecatapi.com/images/a.jpg").is_ok());
        assert!(ImageResult::parse("http://x").is_ok());
        assert!(ImageResult::parse("/cat/relative").is_err());
        assert!(ImageResult::parse("data:image/png;base64,AAAA").is_err());
    }

    #[test]
    fn test_image_result_serde_validates() {
        let ok: ImageResult = serde_json::from_str(r#""https://example.com/a.png""#).unwrap();
        assert_eq!(ok.as_str(), "https://example.com/a.png");
        assert!(serde_json::from_str::<ImageResult>(r#""nope""#).is_err());
    }

    #[test]
    fn test_fact_category_classify() {
        assert_eq!(
            FactCategory::classify("Cats sleep for 12-16 hours a day on average."),
            FactCategory::Behavior
        );
        assert_eq!(
            FactCategory::classify("The Greyhound can reach speeds of up to 45 miles per hour."),
            FactCategory::Behavior
        );
        assert_eq!(
            FactCategory::classify("The Basenji dog is the only breed that doesn't bark."),
            FactCategory::BreedInfo
        );
        assert_eq!(
            FactCategory::classify("Dogs have 42 teeth on average."),
            FactCategory::Anatomy
        );
        assert_eq!(
            FactCategory::classify("A group of cats is called a clowder."),
            FactCategory::General
        );
    }

    #[test]
    fn test_display_breed() {
        assert_eq!(display_breed("german shepherd"), "German Shepherd");
        assert_eq!(display_breed("Maine Coon"), "Maine Coon");
        assert_eq!(display_breed(""), "");
    }
}
