//! HTTP transport implementation
//!
//! Provides the ProofRails HTTP client that implements the Transport trait.
//! Handles authentication, timeouts, retries and rate-limit tracking.

pub mod client;
pub mod retry;

pub use client::{
    BASE_URL_ENV, ByteStream, DEFAULT_BASE_URL, HttpTransport, RequestOptions, TransportConfig,
};
pub use retry::{FailureClass, RetryPolicy, RetryPolicyBuilder};
