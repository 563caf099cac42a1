//! Structured logging for the transport
//!
//! Every attempt, backoff and terminal outcome is logged through this layer
//! so field names stay consistent across the SDK.

use crate::rate_limit::RateLimitSnapshot;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// HTTP request metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request body size in bytes (optional)
    pub body_size: Option<usize>,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            body_size: None,
        }
    }

    /// Set the request body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Log one attempt being sent
    pub fn log_attempt(&self, attempt: u32, max_retries: u32) {
        debug!(
            method = %self.method,
            url = %self.url,
            body_size = self.body_size,
            attempt,
            max_retries,
            "Sending HTTP request"
        );
    }

    /// Log the wait before the next attempt
    pub fn log_backoff(&self, attempt: u32, delay: Duration, reason: &str) {
        warn!(
            method = %self.method,
            url = %self.url,
            attempt,
            delay_ms = delay.as_millis(),
            reason = %reason,
            "Retrying HTTP request"
        );
    }
}

/// HTTP response metadata for structured logging
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code, absent when no response was obtained
    pub status: Option<u16>,
    /// Response body size in bytes (optional)
    pub body_size: Option<usize>,
    /// Time elapsed across all attempts
    pub elapsed: Duration,
    /// Number of retries taken
    pub retries: u32,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: Option<u16>, elapsed: Duration) -> Self {
        Self {
            status,
            body_size: None,
            elapsed,
            retries: 0,
        }
    }

    /// Set the response body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Set the number of retries
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Log successful response
    pub fn log_success(&self, request: &RequestMetadata) {
        info!(
            method = %request.method,
            url = %request.url,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            body_size = self.body_size,
            retries = self.retries,
            "HTTP request succeeded"
        );
    }

    /// Log terminal failure
    pub fn log_error(&self, request: &RequestMetadata, error: &str) {
        warn!(
            method = %request.method,
            url = %request.url,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            error = %error,
            retries = self.retries,
            "HTTP request failed"
        );
    }
}

/// Log a replaced rate-limit snapshot
pub fn log_rate_limit(snapshot: &RateLimitSnapshot) {
    debug!(
        limit = snapshot.limit,
        remaining = snapshot.remaining,
        reset = snapshot.reset,
        "Rate limit updated"
    );
}

/// Timer for measuring request duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Event stream logging context
pub struct StreamContext {
    path: String,
    /// Total events delivered
    pub event_count: u32,
    /// Total events skipped as unparsable
    pub skipped_count: u32,
    timer: RequestTimer,
}

impl StreamContext {
    /// Create a context and log the stream opening
    pub fn open(path: impl Into<String>) -> Self {
        let path = path.into();
        debug!(path = %path, "Opening event stream");
        Self {
            path,
            event_count: 0,
            skipped_count: 0,
            timer: RequestTimer::start(),
        }
    }

    /// Log a delivered event
    pub fn log_event(&mut self, event_type: &str) {
        self.event_count += 1;
        debug!(
            path = %self.path,
            event_num = self.event_count,
            event_type = %event_type,
            "Stream event received"
        );
    }

    /// Log a payload that could not be parsed
    pub fn log_skipped(&mut self, error: &str) {
        self.skipped_count += 1;
        warn!(
            path = %self.path,
            error = %error,
            "Skipping unparsable stream event"
        );
    }

    /// Log the stream ending normally
    pub fn log_complete(&self) {
        info!(
            path = %self.path,
            event_count = self.event_count,
            elapsed_ms = self.timer.elapsed().as_millis(),
            "Event stream closed"
        );
    }

    /// Log a connection error ending the stream
    pub fn log_error(&self, error: &str) {
        warn!(
            path = %self.path,
            event_count = self.event_count,
            elapsed_ms = self.timer.elapsed().as_millis(),
            error = %error,
            "Event stream error"
        );
    }
}
