//! Fetch context providing access to host APIs.
//!
//! The fetch context is passed to every image source and adapter call and
//! bundles the HTTP client with the fetch settings.

use std::sync::Arc;
use std::time::Duration;

use crate::host::http::HttpClient;
use crate::retry::RetryPolicy;

// ============================================================================
// Fetch Settings
// ============================================================================

/// Settings for fetch operations.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Timeout for individual HTTP requests.
    pub timeout: Duration,
    /// Retry policy for top-level image fetches.
    pub retry: RetryPolicy,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}

impl FetchSettings {
    /// Creates settings with custom timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Creates settings with a custom retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

// ============================================================================
// Fetch Context
// ============================================================================

/// Context provided to adapters and image sources.
pub struct FetchContext {
    /// HTTP client with tracing.
    pub http: Arc<HttpClient>,
    /// Fetch settings.
    pub settings: FetchSettings,
}

impl FetchContext {
    /// Creates a new fetch context with default settings.
    pub fn new() -> Self {
        Self::with_settings(FetchSettings::default())
    }

    /// Creates a context with custom settings.
    pub fn with_settings(settings: FetchSettings) -> Self {
        Self {
            http: Arc::new(HttpClient::with_timeout(settings.timeout)),
            settings,
        }
    }

    /// Creates a builder for customizing the context.
    pub fn builder() -> FetchContextBuilder {
        FetchContextBuilder::new()
    }

    /// Returns the effective timeout for fetch operations.
    pub fn timeout(&self) -> Duration {
        self.settings.timeout
    }

    /// Returns the retry policy for top-level image fetches.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.settings.retry
    }
}

impl Default for FetchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FetchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Fetch Context Builder
// ============================================================================

/// Builder for constructing a `FetchContext`.
pub struct FetchContextBuilder {
    http: Option<Arc<HttpClient>>,
    allowed_domains: Option<Vec<String>>,
    settings: FetchSettings,
}

impl FetchContextBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            http: None,
            allowed_domains: None,
            settings: FetchSettings::default(),
        }
    }

    /// Sets the HTTP client. Overrides `timeout` and `allowed_domains`.
    pub fn http(mut self, http: Arc<HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    /// Restricts the default HTTP client to the given domains.
    pub fn allowed_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the fetch settings.
    pub fn settings(mut self, settings: FetchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    /// Sets the retry policy.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.settings.retry = retry;
        self
    }

    /// Builds the fetch context.
    pub fn build(self) -> FetchContext {
        let http = self.http.unwrap_or_else(|| {
            let client = HttpClient::with_timeout(self.settings.timeout);
            let client = match self.allowed_domains {
                Some(domains) => client.allow_domains(domains),
                None => client,
            };
            Arc::new(client)
        });

        FetchContext {
            http,
            settings: self.settings,
        }
    }
}

impl Default for FetchContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = FetchContext::builder()
            .timeout(Duration::from_secs(5))
            .retry(RetryPolicy::new(1))
            .build();

        assert_eq!(ctx.timeout(), Duration::from_secs(5));
        assert_eq!(ctx.retry_policy().max_attempts, 1);
    }

    #[test]
    fn test_default_context() {
        let ctx = FetchContext::new();
        assert_eq!(ctx.settings.timeout, Duration::from_secs(30));
        assert_eq!(ctx.retry_policy().max_attempts, 2);
    }
}
