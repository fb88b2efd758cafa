//! Core error types for `PetDeck`.

use thiserror::Error;

/// Core error type for `PetDeck` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Unknown animal tag.
    #[error("Unknown animal: {0}")]
    UnknownAnimal(String),

    /// Unknown gallery type.
    #[error("Unknown gallery type: {0}")]
    UnknownGalleryType(String),

    /// URL is not a well-formed absolute http(s) URL.
    #[error("Invalid image URL: {0}")]
    InvalidUrl(String),

    /// Invalid data from an API response.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
