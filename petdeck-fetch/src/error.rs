//! Fetch error types.

use thiserror::Error;

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport failed (connection refused, DNS, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("HTTP error! status: {status} ({url})")]
    Status {
        /// Response status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Response body did not match the provider's expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider returned no usable images for the given selection
    /// (a breed, or "random").
    #[error("No images received from API for {0}")]
    NoImages(String),

    /// Host-level HTTP error.
    #[error(transparent)]
    Host(#[from] HttpError),

    /// Every candidate in a fallback chain failed and no placeholder was available.
    #[error("All image sources failed")]
    AllSourcesFailed,

    /// No adapter registered for an animal.
    #[error("No adapter registered for {0}")]
    NoAdapter(String),
}

impl FetchError {
    /// Returns true for failures caused by the network rather than the payload.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            Self::Host(HttpError::Request(e)) => e.is_connect() || e.is_timeout() || e.is_request(),
            Self::Timeout(_) | Self::Host(HttpError::Timeout) => true,
            _ => false,
        }
    }

    /// Maps the error to a message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        if self.is_transport() {
            return "Network error: Please check your internet connection".to_string();
        }
        match self {
            Self::NoImages(_) => "No images available for the selected breed. \
                Try a different breed or random selection."
                .to_string(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// HTTP Error
// ============================================================================

/// HTTP-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request error.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Domain not allowed.
    #[error("Domain not allowed: {0}")]
    DomainNotAllowed(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Timeout.
    #[error("Request timed out")]
    Timeout,
}
