//! Retry strategies and backoff implementations.
//!
//! # Key Types
//!
//! - [`BackoffStrategy`] - Core trait for retry strategies
//! - [`ExponentialBackoff`] - Deterministic exponential backoff
//!
//! # Examples
//!
//! ```rust
//! use proofrails_core::retry::{BackoffStrategy, ExponentialBackoff};
//! use std::time::Duration;
//!
//! let backoff = ExponentialBackoff::builder()
//!     .initial_delay(Duration::from_secs(1))
//!     .build();
//!
//! assert_eq!(backoff.next_delay(0), Some(Duration::from_secs(1)));
//! assert_eq!(backoff.next_delay(2), Some(Duration::from_secs(4)));
//! ```

mod exponential;
mod strategy;

pub use exponential::{ExponentialBackoff, ExponentialBackoffBuilder};
pub use strategy::BackoffStrategy;
