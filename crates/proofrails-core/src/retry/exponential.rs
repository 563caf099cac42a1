//! Deterministic exponential backoff.

use super::strategy::BackoffStrategy;
use std::time::Duration;

/// Exponential backoff without jitter or cap.
///
/// For attempt `n` (0-indexed after the first failure):
///
/// ```text
/// delay = initial_delay * multiplier^n
/// ```
///
/// Arithmetic is done on whole multiples of `initial_delay`, so the schedule is
/// exact (`1s, 2s, 4s, ...`) and saturates at `Duration::MAX` instead of
/// overflowing.
///
/// # Examples
///
/// ```rust
/// use proofrails_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// let backoff = ExponentialBackoff::builder()
///     .max_retries(5)
///     .initial_delay(Duration::from_millis(100))
///     .build();
///
/// assert_eq!(backoff.next_delay(3), Some(Duration::from_millis(800)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExponentialBackoff {
    max_retries: u32,
    initial_delay: Duration,
    multiplier: u32,
}

impl ExponentialBackoff {
    /// Create a new builder for configuring exponential backoff.
    pub fn builder() -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::default()
    }

    /// The delay before the first retry.
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }
}

impl Default for ExponentialBackoff {
    /// Defaults:
    /// - `max_retries`: 3
    /// - `initial_delay`: 1s
    /// - `multiplier`: 2
    fn default() -> Self {
        ExponentialBackoffBuilder::default().build()
    }
}

impl BackoffStrategy for ExponentialBackoff {
    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        let delay = self
            .multiplier
            .checked_pow(attempt)
            .and_then(|factor| self.initial_delay.checked_mul(factor))
            .unwrap_or(Duration::MAX);

        Some(delay)
    }

    fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

/// Builder for configuring `ExponentialBackoff`.
#[derive(Debug, Default)]
pub struct ExponentialBackoffBuilder {
    max_retries: Option<u32>,
    initial_delay: Option<Duration>,
    multiplier: Option<u32>,
}

impl ExponentialBackoffBuilder {
    /// Set the maximum number of retry attempts.
    ///
    /// Default: 3
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Set the delay before the first retry.
    ///
    /// Default: 1s
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = Some(delay);
        self
    }

    /// Set the growth factor between consecutive delays.
    ///
    /// Values below 1 are raised to 1. Default: 2
    pub fn multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = Some(multiplier.max(1));
        self
    }

    /// Build the `ExponentialBackoff` instance.
    pub fn build(self) -> ExponentialBackoff {
        ExponentialBackoff {
            max_retries: self.max_retries.unwrap_or(3),
            initial_delay: self.initial_delay.unwrap_or(Duration::from_secs(1)),
            multiplier: self.multiplier.unwrap_or(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_delay_calculation() {
        let backoff = ExponentialBackoff::builder()
            .initial_delay(Duration::from_millis(1000))
            .build();

        assert_eq!(backoff.next_delay(0), Some(Duration::from_millis(1000)));
        assert_eq!(backoff.next_delay(1), Some(Duration::from_millis(2000)));
        assert_eq!(backoff.next_delay(2), Some(Duration::from_millis(4000)));
        assert_eq!(backoff.next_delay(3), Some(Duration::from_millis(8000)));
    }

    #[test]
    fn test_uncapped_by_default() {
        let backoff = ExponentialBackoff::default();

        assert_eq!(backoff.next_delay(10), Some(Duration::from_secs(1024)));
        assert_eq!(backoff.next_delay(20), Some(Duration::from_secs(1 << 20)));
    }

    #[test]
    fn test_overflow_saturates() {
        let backoff = ExponentialBackoff::default();

        assert_eq!(backoff.next_delay(200), Some(Duration::MAX));
    }

    #[test]
    fn test_builder_defaults() {
        let backoff = ExponentialBackoff::builder().build();

        assert_eq!(backoff.max_retries(), 3);
        assert_eq!(backoff.initial_delay(), Duration::from_secs(1));
        assert_eq!(backoff.multiplier, 2);
    }

    #[test]
    fn test_multiplier_floor() {
        let backoff = ExponentialBackoff::builder().multiplier(0).build();

        assert_eq!(backoff.multiplier, 1);
        assert_eq!(backoff.next_delay(5), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_custom_multiplier() {
        let backoff = ExponentialBackoff::builder()
            .initial_delay(Duration::from_millis(10))
            .multiplier(3)
            .build();

        assert_eq!(backoff.next_delay(2), Some(Duration::from_millis(90)));
    }
}
