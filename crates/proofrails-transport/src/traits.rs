//! Transport trait and wire types
//!
//! Defines the object-safe `Transport` seam and the raw request/response
//! types it exchanges.

use crate::error::{Error, Result};
use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};

/// HTTP request specification
///
/// Represents one logical request. The transport may send it several times
/// when retrying; it is never mutated between attempts.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: Method,

    /// Fully resolved request URL
    pub url: String,

    /// Request headers
    pub headers: HeaderMap,

    /// Request body (optional)
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Create a new HTTP request
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Add a header to the request, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeader`] if the name or value is not valid HTTP.
    pub fn with_header(mut self, key: &str, value: &str) -> Result<Self> {
        let name = key
            .parse::<http::HeaderName>()
            .map_err(|e| Error::InvalidHeader(format!("'{}': {}", key, e)))?;
        let value = value
            .parse::<http::HeaderValue>()
            .map_err(|e| Error::InvalidHeader(format!("value for '{}': {}", key, e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Set the request body
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// HTTP response
///
/// Represents a fully read HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: StatusCode,

    /// Response headers
    pub headers: HeaderMap,

    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parse the body as JSON.
    ///
    /// An empty or whitespace-only body is read as JSON `null`, so callers
    /// expecting `()` or `Option<T>` accept bodiless replies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body does not match `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        let body: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &self.body
        };
        serde_json::from_slice(body).map_err(|e| Error::Decode(e.to_string()))
    }

    /// Get a header value by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Generic transport trait
///
/// `send_http` runs one logical request to completion: every retry happens
/// inside it and only the final outcome is returned.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an HTTP request and receive the successful (2xx) response.
    ///
    /// # Errors
    ///
    /// Returns the terminal [`Error`] once retries are exhausted or a
    /// non-retryable failure occurs.
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse>;
}
