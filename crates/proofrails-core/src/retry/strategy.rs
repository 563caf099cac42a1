//! The retry strategy abstraction.

use std::time::Duration;

/// A backoff schedule for retrying failed operations.
///
/// Implementations decide how long to wait between attempts and when to give
/// up; the caller owns the retry loop. Attempt numbers are 0-indexed counts of
/// failures already observed: `next_delay(0)` is the wait before the first
/// retry.
///
/// # Examples
///
/// ```rust
/// use proofrails_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// let backoff = ExponentialBackoff::builder()
///     .max_retries(3)
///     .initial_delay(Duration::from_millis(100))
///     .build();
///
/// let schedule: Vec<_> = (0..backoff.max_retries())
///     .filter_map(|attempt| backoff.next_delay(attempt))
///     .collect();
/// assert_eq!(
///     schedule,
///     [100, 200, 400].map(Duration::from_millis).to_vec()
/// );
/// ```
pub trait BackoffStrategy: Send + Sync {
    /// Calculate the delay before the next retry attempt.
    ///
    /// Returns `None` when no delay can be computed.
    fn next_delay(&self, attempt: u32) -> Option<Duration>;

    /// Maximum number of retries after the initial attempt.
    ///
    /// With `max_retries() == 3` an operation runs at most 4 times.
    fn max_retries(&self) -> u32;
}
