//! Retry policy for HTTP transport
//!
//! Wraps the backoff abstraction from `proofrails-core` with the
//! ProofRails retry classification.

use std::time::Duration;
pub use proofrails_core::retry::{BackoffStrategy, ExponentialBackoff, ExponentialBackoffBuilder};

/// How a single attempt failed.
///
/// Drives the retry decision. An attempt that never produced a status line
/// (connect error, DNS failure, reset, timeout) is `NoResponse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// No HTTP status was obtained.
    NoResponse,
    /// The server answered with a non-2xx status.
    HttpStatus(u16),
}

impl FailureClass {
    /// Whether this class of failure is ever worth retrying.
    pub fn is_transient(self) -> bool {
        match self {
            FailureClass::NoResponse => true,
            FailureClass::HttpStatus(429) => true,
            FailureClass::HttpStatus(status) => (500..=599).contains(&status),
        }
    }
}

/// HTTP retry policy.
///
/// # Default Configuration
///
/// - `max_retries`: 3
/// - `initial_delay`: 1s
/// - no delay cap, no jitter
///
/// Retry `n` (1-indexed) waits `initial_delay * 2^(n-1)`.
///
/// # Examples
///
/// ```rust
/// use proofrails_transport::http::{FailureClass, RetryPolicy};
/// use std::time::Duration;
///
/// let policy = RetryPolicy::builder()
///     .max_retries(2)
///     .initial_delay(Duration::from_millis(250))
///     .build();
///
/// assert!(policy.should_retry(FailureClass::HttpStatus(503), 0));
/// assert!(!policy.should_retry(FailureClass::HttpStatus(404), 0));
/// assert_eq!(policy.calculate_delay(1), Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    inner: ExponentialBackoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicyBuilder::default().build()
    }
}

impl RetryPolicy {
    /// Create a new builder for configuring the retry policy.
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder::default()
    }

    /// Build a policy from the two client-facing knobs.
    pub fn new(max_retries: u32, initial_delay: Duration) -> Self {
        Self::builder()
            .max_retries(max_retries)
            .initial_delay(initial_delay)
            .build()
    }

    /// Decide whether a failed attempt should be retried.
    ///
    /// `attempt` counts the retries already made for this request, so the
    /// first send is attempt 0.
    pub fn should_retry(&self, class: FailureClass, attempt: u32) -> bool {
        attempt < self.inner.max_retries() && class.is_transient()
    }

    /// Delay before the retry that follows `attempt`.
    pub fn calculate_delay(&self, attempt: u32) -> Duration {
        self.inner.next_delay(attempt).unwrap_or(Duration::ZERO)
    }

    /// Maximum number of retries after the first send.
    pub fn max_retries(&self) -> u32 {
        self.inner.max_retries()
    }
}

/// Builder for HTTP retry policies.
#[derive(Debug)]
pub struct RetryPolicyBuilder {
    inner: ExponentialBackoffBuilder,
}

impl RetryPolicyBuilder {
    /// Set the maximum number of retry attempts.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.inner = self.inner.max_retries(max_retries);
        self
    }

    /// Set the initial delay before the first retry.
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.inner = self.inner.initial_delay(delay);
        self
    }

    /// Build the retry policy.
    pub fn build(self) -> RetryPolicy {
        RetryPolicy {
            inner: self.inner.build(),
        }
    }
}

impl Default for RetryPolicyBuilder {
    fn default() -> Self {
        Self {
            inner: ExponentialBackoff::builder()
                .max_retries(3)
                .initial_delay(Duration::from_secs(1))
                .multiplier(2),
        }
    }
}
