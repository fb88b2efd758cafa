//! Store error types.

use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key cannot be used as a storage slot name.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Settings key not recognized.
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    /// Settings value could not be parsed for its key.
    #[error("Invalid value for {key}: {value}")]
    InvalidSetting {
        /// Settings key.
        key: String,
        /// Rejected value.
        value: String,
    },
}

impl StoreError {
    /// Returns true if this is a transient error that might succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Io(_))
    }
}
