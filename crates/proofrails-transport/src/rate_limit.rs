//! Rate-limit tracking from response headers.

use chrono::{DateTime, Utc};
use http::HeaderMap;
use serde::{Deserialize, Serialize};

/// Header carrying the request quota.
pub const LIMIT_HEADER: &str = "x-ratelimit-limit";
/// Header carrying the remaining requests in the window.
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";
/// Header carrying the window reset, in epoch seconds.
pub const RESET_HEADER: &str = "x-ratelimit-reset";

/// Last-observed quota state reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitSnapshot {
    /// Requests allowed per window
    pub limit: u64,
    /// Requests left in the current window
    pub remaining: u64,
    /// Window reset time, epoch seconds
    pub reset: i64,
}

impl RateLimitSnapshot {
    /// Read a snapshot from response headers.
    ///
    /// Returns `None` unless all three headers are present and parse as
    /// integers.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        Some(Self {
            limit: parse_header(headers, LIMIT_HEADER)?,
            remaining: parse_header(headers, REMAINING_HEADER)?,
            reset: parse_header(headers, RESET_HEADER)?,
        })
    }

    /// The reset time as a timestamp.
    ///
    /// Out-of-range values fall back to the Unix epoch.
    pub fn reset_date(&self) -> DateTime<Utc> {
        self.reset
            .checked_mul(1000)
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}

fn parse_header<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
