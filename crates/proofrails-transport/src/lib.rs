//! HTTP transport layer for the ProofRails SDK
//!
//! Every call the SDK makes goes through [`HttpTransport`]. It builds the
//! request, injects credentials, bounds each attempt with a timeout, records
//! the server's rate-limit headers and retries transient failures with
//! exponential backoff.
//!
//! # Architecture
//!
//! - **Transport trait**: object-safe seam for sending one logical request
//! - **HTTP transport**: reqwest-based client with retry and rate-limit tracking
//! - **Error handling**: one typed [`Error`] for every failure
//!
//! # Usage
//!
//! ```rust,no_run
//! use proofrails_transport::{HttpTransport, TransportConfig};
//!
//! # async fn example() -> proofrails_transport::Result<()> {
//! let transport = HttpTransport::new(TransportConfig::default())?;
//! let receipt: serde_json::Value = transport.get("/v1/iso/receipts/r-123", None).await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod http;
pub mod observability;
pub mod rate_limit;
pub mod traits;

// Re-export commonly used types
pub use error::{Error, Result};
pub use self::http::{
    BASE_URL_ENV, ByteStream, DEFAULT_BASE_URL, FailureClass, HttpTransport, RequestOptions,
    RetryPolicy, TransportConfig,
};
pub use rate_limit::RateLimitSnapshot;
pub use traits::{HttpRequest, HttpResponse, Transport};
