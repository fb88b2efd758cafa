//! Bounded retry for top-level fetch operations.

use std::future::Future;
use std::time::Duration;
use tracing::{error, warn};

use crate::error::{FetchError, HttpError};

/// Policy for retrying failed operations.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first.
    pub max_attempts: u32,
    /// Delay unit; the wait after failed attempt `k` is `base_delay * k`.
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Creates a linear policy with the given number of attempts and a 1s step.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay: Duration::from_millis(1000),
        }
    }

    /// Sets the base delay.
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Calculates the wait after a failed attempt (1-based).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }

    /// Determines if an error is worth another attempt.
    ///
    /// Configuration problems (blocked domains, malformed URLs, missing
    /// adapters) will fail the same way every time.
    pub fn should_retry(&self, error: &FetchError) -> bool {
        !matches!(
            error,
            FetchError::NoAdapter(_)
                | FetchError::Host(HttpError::DomainNotAllowed(_) | HttpError::InvalidUrl(_))
        )
    }

    /// Runs `op` until it succeeds or the policy is exhausted.
    ///
    /// `op` receives the 1-based attempt number. The last error is returned
    /// unchanged.
    pub async fn run<T, F, Fut>(&self, label: &str, mut op: F) -> Result<T, FetchError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let mut attempt = 1;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if attempt >= self.max_attempts || !self.should_retry(&e) {
                        error!(operation = %label, attempts = attempt, error = %e, "All attempts failed");
                        return Err(e);
                    }

                    let delay = self.delay_for_attempt(attempt);
                    warn!(
                        operation = %label,
                        attempt,
                        error = %e,
                        delay_ms = delay.as_millis() as u64,
                        "Attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2)
    }
}
