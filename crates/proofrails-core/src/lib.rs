#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core abstractions for the ProofRails SDK.
//!
//! This crate holds the retry schedule shared by the transport and the SDK
//! facade: the `BackoffStrategy` trait and a pure exponential backoff
//! (`base * multiplier^n`, no jitter, no cap). The retry loop itself lives in
//! the transport, which decides per failure whether to retry.
//!
//! # Examples
//!
//! ```rust
//! use proofrails_core::retry::{BackoffStrategy, ExponentialBackoff};
//! use std::time::Duration;
//!
//! let backoff = ExponentialBackoff::builder()
//!     .max_retries(3)
//!     .initial_delay(Duration::from_millis(100))
//!     .build();
//!
//! assert_eq!(backoff.next_delay(1), Some(Duration::from_millis(200)));
//! ```

pub mod retry;
