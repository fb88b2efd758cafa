//! Animal kinds and gallery modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ============================================================================
// Animal
// ============================================================================

/// Supported animal kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Animal {
    /// Cats
    #[default]
    Cat,
    /// Dogs
    Dog,
}

impl Animal {
    /// Returns the display name for this animal.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cat => "Cat",
            Self::Dog => "Dog",
        }
    }

    /// Returns the lowercase tag used in storage and on the command line.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog => "dog",
        }
    }

    /// Returns all animals.
    pub fn all() -> &'static [Animal] {
        &[Self::Cat, Self::Dog]
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Animal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cat" | "cats" => Ok(Self::Cat),
            "dog" | "dogs" => Ok(Self::Dog),
            other => Err(CoreError::UnknownAnimal(other.to_string())),
        }
    }
}

// ============================================================================
// Gallery Type
// ============================================================================

/// How an image batch is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GalleryType {
    /// Unfiltered random images.
    #[default]
    Random,
    /// Images filtered by the selected breed, where the provider supports it.
    Breed,
}

impl GalleryType {
    /// Returns the breed filter to forward for this gallery type.
    ///
    /// Only [`GalleryType::Breed`] passes the breed through.
    pub fn breed_filter<'a>(&self, breed: Option<&'a str>) -> Option<&'a str> {
        match self {
            Self::Random => None,
            Self::Breed => breed.filter(|b| !b.trim().is_empty()),
        }
    }
}

impl fmt::Display for GalleryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::Breed => f.write_str("breed"),
        }
    }
}

impl FromStr for GalleryType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "breed" => Ok(Self::Breed),
            other => Err(CoreError::UnknownGalleryType(other.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_parse() {
        assert_eq!("cat".parse::<Animal>().unwrap(), Animal::Cat);
        assert_eq!(" Dogs ".parse::<Animal>().unwrap(), Animal::Dog);
        assert!("bird".parse::<Animal>().is_err());
    }

    #[test]
    fn test_animal_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Animal::Dog).unwrap(), r#""dog""#);
        let cat: Animal = serde_json::from_str(r#""cat""#).unwrap();
        assert_eq!(cat, Animal::Cat);
    }

    #[test]
    fn test_gallery_breed_filter() {
        assert_eq!(GalleryType::Random.breed_filter(Some("beagle")), None);
        assert_eq!(GalleryType::Breed.breed_filter(Some("beagle")), Some("beagle"));
        assert_eq!(GalleryType::Breed.breed_filter(Some("  ")), None);
        assert_eq!(GalleryType::Breed.breed_filter(None), None);
    }
}
